use std::sync::Arc;

use orderdesk_app::{demo_order, run};
use orderdesk_invoicing::InvoiceSummary;
use orderdesk_notifications::{EmailSender, EmailService, InMemoryEmailSender, NotificationError};
use orderdesk_sales::CONFIRMATION_MESSAGE;

struct FailingSender;

impl EmailSender for FailingSender {
    fn send(&self, _to: &str, _message: &str) -> Result<(), NotificationError> {
        Err(NotificationError::Io(std::io::Error::other("smtp down")))
    }
}

#[test]
fn prints_invoice_then_notifies_client() {
    let sender = Arc::new(InMemoryEmailSender::new());
    let mut out = Vec::new();

    run(&mut out, sender.clone()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Cliente: João\n\
         1x Notebook - R$3500.00\n\
         2x Mouse - R$80.00\n\
         Subtotal: R$3660.00\n\
         Desconto: R$366.00\n\
         Total final: R$3294.00\n"
    );

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "joao@email.com");
    assert_eq!(sent[0].message, CONFIRMATION_MESSAGE);
}

#[test]
fn console_email_service_follows_invoice() {
    let service = Arc::new(EmailService::new(Vec::new()));
    let mut out = Vec::new();

    run(&mut out, service.clone()).unwrap();

    let service = Arc::try_unwrap(service).unwrap_or_else(|_| panic!("service still shared"));
    let email = String::from_utf8(service.into_inner().unwrap()).unwrap();
    assert_eq!(
        email,
        "Enviando e-mail para joao@email.com: Pedido recebido! Obrigado pela compra.\n"
    );
}

#[test]
fn notifier_failure_surfaces_after_invoice() {
    let mut out = Vec::new();
    let err = run(&mut out, Arc::new(FailingSender)).unwrap_err();

    assert!(err.to_string().contains("failed to send confirmation email"));
    assert!(String::from_utf8(out).unwrap().ends_with("Total final: R$3294.00\n"));
}

#[test]
fn demo_order_summary_as_json() {
    let order = demo_order(Arc::new(InMemoryEmailSender::new())).unwrap();
    let json = serde_json::to_value(InvoiceSummary::from_order(&order)).unwrap();

    assert_eq!(json["client_name"], "João");
    assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    assert_eq!(json["subtotal"], 3660.0);
}
