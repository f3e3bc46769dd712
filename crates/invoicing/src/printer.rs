//! Plain-text invoice rendering.

use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use orderdesk_sales::Order;

/// Prefix printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Fixed two fractional digits, e.g. `3500.0` -> `"3500.00"`.
///
/// Rounds the shortest decimal form of `amount` half away from zero, so
/// `0.125` prints as `"0.13"`. Amounts outside `Decimal`'s range fall back to
/// plain float formatting.
pub fn format_currency(amount: f64) -> String {
    match Decimal::from_str(&amount.to_string()) {
        Ok(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        Err(_) => format!("{amount:.2}"),
    }
}

/// Renders an order as a text invoice.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoicePrinter;

impl InvoicePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Write the invoice to `out`.
    pub fn print<W: Write + ?Sized>(&self, order: &Order, out: &mut W) -> io::Result<()> {
        out.write_all(self.render(order).as_bytes())
    }

    /// The invoice text: client, one line per item, then the totals.
    pub fn render(&self, order: &Order) -> String {
        let mut text = format!("Cliente: {}\n", order.client().name());

        for item in order.items() {
            text.push_str(&format!(
                "{}x {} - {CURRENCY_SYMBOL}{}\n",
                item.quantity(),
                item.product(),
                format_currency(item.price())
            ));
        }

        text.push_str(&format!(
            "Subtotal: {CURRENCY_SYMBOL}{}\n",
            format_currency(order.calculate_subtotal())
        ));
        text.push_str(&format!(
            "Desconto: {CURRENCY_SYMBOL}{}\n",
            format_currency(order.calculate_discount_amount())
        ));
        text.push_str(&format!(
            "Total final: {CURRENCY_SYMBOL}{}\n",
            format_currency(order.calculate_final_total())
        ));
        text
    }
}
