use thiserror::Error;

use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Everything that can go wrong between opening the booking flow and a
/// persisted reservation. Each variant is recovered at the handler
/// boundary and rendered as user-visible text; none are fatal.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Room {0} not found")]
    RoomNotFound(Uuid),

    #[error("Check-out date must be after check-in date")]
    InvalidStay,

    #[error("Guest count {requested} is outside the allowed range 1..={capacity}")]
    GuestCount { requested: i32, capacity: i32 },

    #[error("Sign in to reserve a room")]
    Unauthenticated,

    #[error("No room selected")]
    NoRoomSelected,

    #[error("A reservation is already being submitted")]
    SubmissionPending,

    #[error("Reservations can only be confirmed at the payment step")]
    NotAtPaymentStep,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to load room details: {0}")]
    Fetch(#[source] sqlx::Error),

    #[error("Failed to create booking: {0}")]
    Submission(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with email '{0}' already exists")]
    EmailTaken(String),

    #[error("Password hashing error: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BookingError {
    /// True for failures worth retrying from the same screen, as opposed
    /// to terminal states like a missing room.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::Submission(_) | Self::SubmissionPending
        )
    }
}
