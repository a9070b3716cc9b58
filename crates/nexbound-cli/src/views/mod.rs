//! Text rendering of application snapshots.
//!
//! Views read only the published [`AppState`]; nothing here touches the
//! store.

mod dashboard;
mod landing;
pub mod login;

use colored::Colorize;
use nexbound_application::AppState;
use nexbound_core::route::Route;

pub fn render(state: &AppState) -> String {
    let mut lines = vec![navbar(state)];
    lines.extend(match state.current_route() {
        Route::Landing => landing::render(),
        Route::Login => login::render(state),
        Route::Dashboard => dashboard::render(state),
    });
    if state.current_route() == Route::Landing {
        lines.push(String::new());
        lines.push(format!(
            "  {}",
            "Nexbound | Product | Company | Legal".bright_black()
        ));
    }
    lines.join("\n")
}

fn navbar(state: &AppState) -> String {
    let brand = "Nexbound".bright_blue().bold();
    let location = format!("({})", state.current_route()).bright_black();
    let account = match state.session().user() {
        Some(user) => format!("{} <{}> | logout", user.name, user.email),
        None => "Sign In: goto /login".to_string(),
    };
    format!("{brand} {location}  {account}")
}
