//! Interactive shell.
//!
//! Commands are dispatched to the use cases; the screen is redrawn from the
//! store's snapshot channel whenever a command changed the state.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use nexbound_application::{AppState, Completion, NexboundApp};
use nexbound_core::route::Route;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::command::{ReplCommand, help_text};
use crate::helper::ReplHelper;
use crate::views::{self, login::DEFAULT_EMAIL};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// State changed or nothing to say; redraw if needed.
    Done,
    /// Print this text as-is.
    Print(String),
    Quit,
}

pub async fn run(app: &NexboundApp) -> Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    let mut snapshots = app.store.subscribe();

    println!("{}", "=== Nexbound ===".bright_blue().bold());
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());
    println!("{}", views::render(&snapshots.borrow_and_update()));

    loop {
        let prompt = format!("{} > ", app.store.snapshot().current_route());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<ReplCommand>() {
                    Ok(command) => command,
                    Err(err) => {
                        eprintln!("{}", err.to_string().red());
                        continue;
                    }
                };

                if let Some(notice) = pending_notice(&command) {
                    println!("{}", notice.yellow());
                }

                match execute(app, command).await {
                    Ok(Reply::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Reply::Print(text)) => {
                        snapshots.mark_unchanged();
                        println!("{text}");
                    }
                    Ok(Reply::Done) => {}
                    Err(err) => eprintln!("{}", format!("Error: {err:#}").red()),
                }

                if snapshots.has_changed().unwrap_or(false) {
                    let state = snapshots.borrow_and_update().clone();
                    println!("{}", views::render(&state));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

fn pending_notice(command: &ReplCommand) -> Option<&'static str> {
    match command {
        ReplCommand::Login { .. } => Some("Signing in..."),
        ReplCommand::Generate => Some("Generating..."),
        ReplCommand::Reload => Some("Loading dashboard..."),
        _ => None,
    }
}

/// Runs one command against the application.
pub async fn execute(app: &NexboundApp, command: ReplCommand) -> Result<Reply> {
    match command {
        ReplCommand::Goto(path) => {
            app.navigation.navigate_path(&path).await?;
        }
        ReplCommand::Login { email } => {
            if app.store.snapshot().current_route() != Route::Login {
                app.navigation.navigate(Route::Login).await;
            }
            let email = email.as_deref().unwrap_or(DEFAULT_EMAIL);
            match app.session.login(email).await {
                Ok(_) => {}
                // The login view shows the inline error.
                Err(err) if err.is_authentication() => {}
                Err(err) => return Err(err.into()),
            }
        }
        ReplCommand::Logout => {
            app.session.logout().await;
        }
        ReplCommand::Tab(tab) => app.dashboard.select_tab(tab).await?,
        ReplCommand::Edit(id) => app.dashboard.edit_campaign(&id).await?,
        ReplCommand::Set { field, value } => app.dashboard.update_field(field, value).await?,
        ReplCommand::New => app.dashboard.start_new_draft().await?,
        ReplCommand::Generate => {
            if let Completion::Stale = app.dashboard.submit_draft().await? {
                return Ok(Reply::Print(
                    "The writer changed while generating; the result was discarded.".to_string(),
                ));
            }
        }
        ReplCommand::Copy => {
            let state = app.store.snapshot();
            return Ok(Reply::Print(copyable_draft(&state)?.to_string()));
        }
        ReplCommand::Reload => {
            app.dashboard.reload().await?;
        }
        ReplCommand::Show { json } => {
            let state = app.store.snapshot();
            let text = if json {
                serde_json::to_string_pretty(&state).context("Failed to serialize state")?
            } else {
                views::render(&state)
            };
            return Ok(Reply::Print(text));
        }
        ReplCommand::Help => return Ok(Reply::Print(help_text().to_string())),
        ReplCommand::Quit => return Ok(Reply::Quit),
    }
    Ok(Reply::Done)
}

fn copyable_draft(state: &AppState) -> Result<&str> {
    let Some(dashboard) = state.dashboard() else {
        bail!("The dashboard is not open");
    };
    let draft = dashboard.view().draft();
    if !draft.has_draft() {
        bail!("Nothing to copy yet. Generate a draft first.");
    }
    Ok(draft.generated_draft())
}
