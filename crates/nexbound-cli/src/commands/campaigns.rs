use anyhow::Result;
use nexbound_application::NexboundApp;
use nexbound_core::view::ActiveTab;

use crate::views::{self, login::DEFAULT_EMAIL};

/// Signs in with the demo account and prints the campaign table.
pub async fn run(app: &NexboundApp) -> Result<()> {
    app.session.login(DEFAULT_EMAIL).await?;
    app.dashboard.select_tab(ActiveTab::Campaigns).await?;
    println!("{}", views::render(&app.store.snapshot()));
    Ok(())
}
