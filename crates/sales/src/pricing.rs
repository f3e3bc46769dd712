//! Discount policy.

/// Flat discount applied to every order's subtotal (10%).
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.1;

/// Discount owed on `amount` at `rate`.
///
/// Inputs are not range-checked: a negative amount or a rate outside `[0, 1]`
/// is passed straight through.
pub fn calculate_discount(amount: f64, rate: f64) -> f64 {
    amount * rate
}
