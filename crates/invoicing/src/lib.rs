//! Invoicing: presentation of an order's lines and totals.
//!
//! Nothing here mutates an order; everything is derived from the values the
//! order computes.

pub mod printer;
pub mod summary;

pub use printer::{CURRENCY_SYMBOL, InvoicePrinter, format_currency};
pub use summary::{InvoiceSummary, SummaryLine};
