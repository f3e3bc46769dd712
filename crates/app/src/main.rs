use std::sync::Arc;

use orderdesk_notifications::EmailService;

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let mut stdout = std::io::stdout();
    orderdesk_app::run(&mut stdout, Arc::new(EmailService::stdout()))
}
