//! The reservation core: a draft value object, the 3-step wizard state
//! machine, and the single write path that turns a completed wizard into
//! a booking row.

pub use draft::*;
pub use flow::*;
pub use reservation::*;

mod draft;
mod flow;
mod reservation;
