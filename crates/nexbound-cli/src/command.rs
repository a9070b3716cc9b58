//! REPL command parsing.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use nexbound_core::draft::DraftField;
use nexbound_core::view::ActiveTab;

/// Command words offered by completion, in help order.
pub const COMMAND_WORDS: [&str; 13] = [
    "goto", "login", "logout", "tab", "edit", "set", "new", "generate", "copy", "reload", "show",
    "help", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Goto(String),
    Login { email: Option<String> },
    Logout,
    Tab(ActiveTab),
    Edit(String),
    Set { field: DraftField, value: String },
    New,
    Generate,
    Copy,
    Reload,
    Show { json: bool },
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "goto" | "go" => Self::Goto(required(rest, "goto <path>")?.to_string()),
            "login" => Self::Login {
                // A second word is the password, which is not checked.
                email: rest.split_whitespace().next().map(str::to_string),
            },
            "logout" => Self::Logout,
            "tab" => {
                let name = required(rest, "tab <overview|campaigns|ai-writer>")?;
                Self::Tab(name.parse().map_err(|_| anyhow!("Unknown tab '{}'", name))?)
            }
            "edit" => Self::Edit(required(rest, "edit <campaign-id>")?.to_string()),
            "set" => {
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(name, value)| (name, value.trim()))
                    .unwrap_or((rest, ""));
                let name = required(name, "set <field> <value>")?;
                let field = name
                    .parse()
                    .with_context(|| format!("Unknown field '{}'", name))?;
                Self::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "new" => Self::New,
            "generate" | "gen" => Self::Generate,
            "copy" => Self::Copy,
            "reload" => Self::Reload,
            "show" => Self::Show {
                json: rest.eq_ignore_ascii_case("json"),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "" => bail!("Empty command"),
            other => bail!("Unknown command '{}'. Type `help` for a list.", other),
        };
        Ok(command)
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        bail!("Usage: {}", usage);
    }
    Ok(value)
}

pub fn help_text() -> &'static str {
    "\
goto <path>            Navigate to /, /login or /dashboard
login [email]          Sign in (defaults to demo@nexbound.io)
logout                 Sign out and return to /
tab <name>             Switch dashboard tab: overview, campaigns, ai-writer
edit <campaign-id>     Load a campaign into the AI writer
set <field> <value>    Set recipient, company, value_prop or tone
new                    Clear the AI writer
generate               Generate a draft from the writer fields
copy                   Print the generated draft without decoration
reload                 Fetch dashboard data again
show [json]            Render the current view (or dump the state)
help                   Show this help
quit                   Exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "goto /dashboard".parse::<ReplCommand>().unwrap(),
            ReplCommand::Goto("/dashboard".into())
        );
        assert_eq!(
            "login".parse::<ReplCommand>().unwrap(),
            ReplCommand::Login { email: None }
        );
        assert_eq!(
            "login error@x.com secret".parse::<ReplCommand>().unwrap(),
            ReplCommand::Login {
                email: Some("error@x.com".into())
            }
        );
        assert_eq!(
            "tab ai-writer".parse::<ReplCommand>().unwrap(),
            ReplCommand::Tab(ActiveTab::AiWriter)
        );
        assert_eq!(
            "EDIT c_2".parse::<ReplCommand>().unwrap(),
            ReplCommand::Edit("c_2".into())
        );
        assert_eq!(
            "show json".parse::<ReplCommand>().unwrap(),
            ReplCommand::Show { json: true }
        );
    }

    #[test]
    fn test_set_keeps_spaces_in_value() {
        assert_eq!(
            "set value_prop  We help teams   ship".parse::<ReplCommand>().unwrap(),
            ReplCommand::Set {
                field: DraftField::ValueProposition,
                value: "We help teams   ship".into()
            }
        );
        assert_eq!(
            "set recipient".parse::<ReplCommand>().unwrap(),
            ReplCommand::Set {
                field: DraftField::RecipientName,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<ReplCommand>().is_err());
        assert!("dance".parse::<ReplCommand>().is_err());
        assert!("goto".parse::<ReplCommand>().is_err());
        assert!("tab settings".parse::<ReplCommand>().is_err());
        assert!("set colour blue".parse::<ReplCommand>().is_err());
    }

    #[test]
    fn test_every_command_word_parses() {
        for word in COMMAND_WORDS {
            let line = match word {
                "goto" => "goto /",
                "tab" => "tab overview",
                "edit" => "edit c_1",
                "set" => "set tone casual",
                other => other,
            };
            assert!(line.parse::<ReplCommand>().is_ok(), "{line}");
        }
    }
}
