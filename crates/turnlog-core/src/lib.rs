pub mod markers;
pub mod role;
pub mod turn;

pub use markers::{MarkerError, MarkerMatch, MarkerTable};
pub use role::Role;
pub use turn::{MessageRecord, Turn};
