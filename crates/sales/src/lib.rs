//! Sales orders domain module.
//!
//! This crate contains business rules for orders and their totals, implemented
//! as deterministic domain logic. The only side effect, the confirmation
//! email, goes through an injected [`orderdesk_notifications::EmailSender`].

pub mod item;
pub mod order;
pub mod pricing;

pub use item::OrderItem;
pub use order::{CONFIRMATION_MESSAGE, Order};
pub use pricing::{DEFAULT_DISCOUNT_RATE, calculate_discount};
