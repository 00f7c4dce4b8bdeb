pub mod handlers;
pub mod helpers;
pub mod session;
pub mod state;
pub mod templates;

pub use state::AppState;
