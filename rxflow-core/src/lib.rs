pub mod order_id;
pub mod priority;
pub mod status;

pub use order_id::OrderId;
pub use priority::Priority;
pub use status::OrderStatus;

/// A simulated workflow day. Day 0 is the start of a session.
pub type Day = i64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Order ID cannot be empty.")]
    EmptyIdentifier,
    #[error("Invalid priority '{0}'. Must be STAT, URGENT, or ROUTINE.")]
    InvalidPriority(String),
}
