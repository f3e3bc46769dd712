use serde::{Deserialize, Serialize};

use orderdesk_sales::Order;

/// One printed line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
}

/// Snapshot of everything an invoice shows, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub client_name: String,
    pub client_email: String,
    pub lines: Vec<SummaryLine>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

impl InvoiceSummary {
    pub fn from_order(order: &Order) -> Self {
        let lines = order
            .items()
            .iter()
            .map(|item| SummaryLine {
                product: item.product().to_string(),
                quantity: item.quantity(),
                unit_price: item.price(),
                total: item.total(),
            })
            .collect();

        Self {
            client_name: order.client().name().to_string(),
            client_email: order.client().email().to_string(),
            lines,
            subtotal: order.calculate_subtotal(),
            discount: order.calculate_discount_amount(),
            total: order.calculate_final_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use orderdesk_notifications::InMemoryEmailSender;
    use orderdesk_parties::Client;

    #[test]
    fn captures_lines_and_totals() {
        let client = Arc::new(Client::new("João", "joao@email.com"));
        let mut order = Order::new(Some(client), Arc::new(InMemoryEmailSender::new())).unwrap();
        order.add_product("Notebook", 1, 3500.0).unwrap();
        order.add_product("Mouse", 2, 80.0).unwrap();

        let summary = InvoiceSummary::from_order(&order);
        assert_eq!(summary.client_name, "João");
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[1].product, "Mouse");
        assert_eq!(summary.lines[1].total, 160.0);
        assert_eq!(summary.subtotal, 3660.0);
        assert_eq!(summary.total, order.calculate_final_total());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["lines"][0]["unit_price"], 3500.0);
        assert_eq!(json["client_email"], "joao@email.com");
    }
}
