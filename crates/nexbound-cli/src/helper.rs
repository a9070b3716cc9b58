use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use nexbound_core::draft::DraftField;
use nexbound_core::view::ActiveTab;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::command::COMMAND_WORDS;

const ROUTES: [&str; 3] = ["/", "/login", "/dashboard"];

/// Rustyline helper with completion, highlighting and hints for REPL
/// commands and their first argument.
#[derive(Clone)]
pub struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Candidates for the argument of `command`.
    fn arguments(command: &str) -> Vec<String> {
        match command {
            "goto" => ROUTES.iter().map(|route| route.to_string()).collect(),
            "tab" => ActiveTab::iter().map(|tab| tab.to_string()).collect(),
            "set" => DraftField::iter().map(|field| field.to_string()).collect(),
            "show" => vec!["json".to_string()],
            _ => Vec::new(),
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        match line.split_once(' ') {
            None => (
                0,
                self.commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(line))
                    .cloned()
                    .collect(),
            ),
            Some((command, arg)) if !arg.contains(' ') => (
                command.len() + 1,
                Self::arguments(command)
                    .into_iter()
                    .filter(|candidate| candidate.starts_with(arg))
                    .collect(),
            ),
            Some(_) => (line.len(), Vec::new()),
        }
    }
}

impl Default for ReplHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split(' ').next().unwrap_or("");
        if self.commands.iter().any(|cmd| cmd == word) {
            Owned(format!("{}{}", word.bright_cyan(), &line[word.len()..]))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        let (start, candidates) = self.candidates(line);
        let typed = &line[start..];
        candidates
            .into_iter()
            .find(|candidate| candidate.len() > typed.len())
            .map(|candidate| candidate[typed.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_candidates() {
        let helper = ReplHelper::new();
        assert_eq!(
            helper.candidates("lo"),
            (0, vec!["login".to_string(), "logout".to_string()])
        );
    }

    #[test]
    fn test_argument_candidates() {
        let helper = ReplHelper::new();
        assert_eq!(
            helper.candidates("goto /d"),
            (5, vec!["/dashboard".to_string()])
        );
        assert_eq!(helper.candidates("tab ai"), (4, vec!["ai-writer".to_string()]));
        assert_eq!(
            helper.candidates("set v"),
            (4, vec!["value_proposition".to_string()])
        );
        assert_eq!(helper.candidates("set tone casual").1, Vec::<String>::new());
    }
}
