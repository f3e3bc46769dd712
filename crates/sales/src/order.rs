use std::sync::Arc;

use orderdesk_core::{AggregateRoot, DomainError, DomainResult, OrderId};
use orderdesk_notifications::{EmailSender, NotificationError};
use orderdesk_parties::Client;

use crate::item::OrderItem;
use crate::pricing::{DEFAULT_DISCOUNT_RATE, calculate_discount};

/// Message sent to the client once an order is placed.
pub const CONFIRMATION_MESSAGE: &str = "Pedido recebido! Obrigado pela compra.";

/// Aggregate root: Order.
///
/// Owns its lines exclusively and is the sole authority for totals. Lines are
/// only ever appended; nothing removes or edits them.
pub struct Order {
    id: OrderId,
    client: Arc<Client>,
    items: Vec<OrderItem>,
    discount_rate: f64,
    notifier: Arc<dyn EmailSender>,
    version: u64,
}

impl Order {
    /// Open an empty order for `client`.
    ///
    /// Fails with `InvalidArgument` when no client is given.
    pub fn new(client: Option<Arc<Client>>, notifier: Arc<dyn EmailSender>) -> DomainResult<Self> {
        let client = client.ok_or_else(|| DomainError::invalid_argument("client must not be null"))?;

        Ok(Self {
            id: OrderId::new(),
            client,
            items: Vec::new(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
            notifier,
            version: 0,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Append a line. A rejected line leaves the order untouched.
    pub fn add_product(
        &mut self,
        product: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> DomainResult<()> {
        let item = OrderItem::new(product, quantity, price)?;
        self.items.push(item);

        // Deterministic version tracking: +1 per appended line.
        self.version += 1;
        Ok(())
    }

    /// Sum of line totals, in line order.
    pub fn calculate_subtotal(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.total())
    }

    pub fn calculate_discount_amount(&self) -> f64 {
        calculate_discount(self.calculate_subtotal(), self.discount_rate)
    }

    pub fn calculate_final_total(&self) -> f64 {
        self.calculate_subtotal() - self.calculate_discount_amount()
    }

    /// Send the confirmation email to the client.
    ///
    /// Notifier failures are returned as-is; nothing is retried.
    pub fn send_email(&self) -> Result<(), NotificationError> {
        self.notifier.send(self.client.email(), CONFIRMATION_MESSAGE)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl core::fmt::Debug for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("client", &self.client)
            .field("items", &self.items)
            .field("discount_rate", &self.discount_rate)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
