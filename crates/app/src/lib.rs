//! `orderdesk-app` — wires the domain crates into the demo order flow.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use orderdesk_core::AggregateRoot;
use orderdesk_invoicing::InvoicePrinter;
use orderdesk_notifications::EmailSender;
use orderdesk_parties::Client;
use orderdesk_sales::Order;

/// Build the demonstration order for a fixed client.
pub fn demo_order(notifier: Arc<dyn EmailSender>) -> anyhow::Result<Order> {
    let client = Arc::new(Client::new("João", "joao@email.com"));

    let mut order = Order::new(Some(client), notifier)?;
    order.add_product("Notebook", 1, 3500.0)?;
    order.add_product("Mouse", 2, 80.0)?;

    Ok(order)
}

/// Place the demo order: print its invoice to `out`, then email the client.
pub fn run<W: Write + ?Sized>(out: &mut W, notifier: Arc<dyn EmailSender>) -> anyhow::Result<()> {
    let order = demo_order(notifier)?;
    tracing::info!(
        order_id = %order.id(),
        items = order.items().len(),
        total = order.calculate_final_total(),
        "order placed"
    );

    InvoicePrinter::new()
        .print(&order, &mut *out)
        .context("failed to print invoice")?;
    out.flush().context("failed to print invoice")?;

    order
        .send_email()
        .context("failed to send confirmation email")?;

    Ok(())
}
