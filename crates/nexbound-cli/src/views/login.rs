//! Sign-in view.

use colored::Colorize;
use nexbound_application::AppState;

/// Pre-filled email of the demo account.
pub const DEFAULT_EMAIL: &str = "demo@nexbound.io";
/// Pre-filled password. Collected but never checked.
pub const DEFAULT_PASSWORD: &str = "password";

pub fn render(state: &AppState) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("  {}", "Sign in to your account".bold()),
        "  Or start your 14-day free trial".to_string(),
    ];

    if let Some(destination) = state.navigation().intended_destination() {
        lines.push(format!(
            "  {}",
            format!("Sign in to continue to {destination}").bright_black()
        ));
    }

    let email = state.login_email().unwrap_or(DEFAULT_EMAIL);
    lines.push(format!("  Email address: {email}"));
    lines.push(format!("  Password:      {}", "*".repeat(DEFAULT_PASSWORD.len())));

    if let Some(error) = state.login_error() {
        lines.push(format!("  {}", error.red()));
    }

    if state.session().is_loading() {
        lines.push(format!("  {}", "Signing in...".yellow()));
    } else {
        lines.push(format!("  {}", "Type `login [email]` to sign in.".bright_black()));
    }
    lines
}
