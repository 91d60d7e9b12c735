//! Terminal front end for the engine's interaction seam: numbered pickers
//! and plain-text notifications on stderr.

use std::io::{BufRead, Write};

use tracing::warn;

use gpr_runner_core::error::Result;
use gpr_runner_core::interfaces::{Answer, Interaction, PickEntry, PickOutcome};

/// Interactive prompts on stdin/stderr. Notifications go to stderr so they
/// never mix with task output on stdout.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, text: &str) -> Result<String> {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        write!(handle, "{text}")?;
        handle.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Interaction for TerminalInteraction {
    fn pick_task(&self, entries: &[PickEntry]) -> Result<PickOutcome> {
        {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            for (index, entry) in entries.iter().enumerate() {
                if entry.separator_before {
                    writeln!(handle, "  ----")?;
                }
                match &entry.description {
                    Some(description) => {
                        writeln!(handle, "{:3}. {}  ({})", index + 1, entry.label, description)?
                    }
                    None => writeln!(handle, "{:3}. {}", index + 1, entry.label)?,
                }
            }
        }

        let answer = self.prompt("Task number to run, c<N> to configure, empty to cancel: ")?;
        Ok(parse_pick(&answer, entries.len()))
    }

    fn show_info(&self, message: &str) {
        eprintln!("info: {message}");
    }

    fn show_warning(&self, message: &str) {
        warn!("{message}");
        eprintln!("warning: {message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn ask_yes_no(&self, message: &str, offer_dont_show_again: bool) -> Result<Answer> {
        let suffix = if offer_dont_show_again {
            "[y/n/d(on't show again)] "
        } else {
            "[y/n] "
        };
        let answer = self.prompt(&format!("{message} {suffix}"))?;
        Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => Answer::Yes,
            "d" if offer_dont_show_again => Answer::DontShowAgain,
            _ => Answer::No,
        })
    }
}

/// Parse a picker reply: a 1-based index runs the task, a `c` prefix
/// configures it, anything else dismisses the picker.
fn parse_pick(answer: &str, count: usize) -> PickOutcome {
    let (configure, number) = match answer.strip_prefix('c') {
        Some(rest) => (true, rest),
        None => (false, answer),
    };
    match number.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => {
            if configure {
                PickOutcome::Configure(n - 1)
            } else {
                PickOutcome::Chosen(n - 1)
            }
        }
        _ => PickOutcome::Dismissed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_replies_map_to_outcomes() {
        assert_eq!(parse_pick("1", 3), PickOutcome::Chosen(0));
        assert_eq!(parse_pick("3", 3), PickOutcome::Chosen(2));
        assert_eq!(parse_pick("c2", 3), PickOutcome::Configure(1));
        assert_eq!(parse_pick("", 3), PickOutcome::Dismissed);
        assert_eq!(parse_pick("4", 3), PickOutcome::Dismissed);
        assert_eq!(parse_pick("c0", 3), PickOutcome::Dismissed);
        assert_eq!(parse_pick("nope", 3), PickOutcome::Dismissed);
    }
}
