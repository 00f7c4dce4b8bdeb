use serde::{Deserialize, Serialize};

use crate::common::BookingError;

/// Wizard steps, in presentation order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Step {
    RoomDetails,
    GuestInfo,
    Payment,
}

impl Step {
    pub const COUNT: u8 = 3;

    pub fn number(&self) -> u8 {
        match self {
            Self::RoomDetails => 1,
            Self::GuestInfo => 2,
            Self::Payment => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::RoomDetails),
            2 => Some(Self::GuestInfo),
            3 => Some(Self::Payment),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RoomDetails => "Room Details",
            Self::GuestInfo => "Guest Information",
            Self::Payment => "Payment",
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Self::RoomDetails
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Payment
    }

    fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

/// Handle for one in-flight submission. Completing the flow requires the
/// handle to still match the flow's generation, so a submission that was
/// abandoned (the user stepped back and resubmitted) cannot apply its
/// result afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// Drives the linear 3-step wizard over a single room. Step transitions
/// never skip; submission is exclusive and only valid at the last step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookingFlow {
    step: Step,
    busy: bool,
    generation: u64,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            step: Step::RoomDetails,
            busy: false,
            generation: 0,
        }
    }

    /// Resume the wizard at a known step, e.g. when the step survives a
    /// round trip through a form field.
    pub fn at_step(step: Step) -> Self {
        Self {
            step,
            busy: false,
            generation: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Move forward one step. A no-op at the last step and while a
    /// submission is pending. No per-step field validation happens here;
    /// the payment step can be reached with an untouched form.
    pub fn advance(&mut self) {
        if self.busy {
            return;
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Move back one step. A no-op at the first step. Stepping back while
    /// a submission is pending abandons that submission.
    pub fn retreat(&mut self) {
        let Some(previous) = self.step.previous() else {
            return;
        };

        if self.busy {
            self.busy = false;
            self.generation += 1;
        }

        self.step = previous;
    }

    /// Claim the right to submit. Valid only at the payment step, and only
    /// while no other submission is pending.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, BookingError> {
        if !self.step.is_last() {
            return Err(BookingError::NotAtPaymentStep);
        }

        if self.busy {
            return Err(BookingError::SubmissionPending);
        }

        self.busy = true;

        Ok(SubmissionTicket {
            generation: self.generation,
        })
    }

    /// Settle a submission, successful or not. Returns false when the
    /// ticket is stale, in which case the flow is left untouched.
    pub fn finish_submission(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.busy = false;
        true
    }
}
