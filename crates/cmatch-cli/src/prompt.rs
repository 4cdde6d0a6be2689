//! Operator confirmation for zip inference.
//!
//! The pipeline takes confirmation as a capability (a function returning a
//! boolean) so headless runs and tests can decide without a terminal.

use std::io::{self, BufRead, IsTerminal, Write};

/// How to answer the zip-inference question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipInference {
    /// Ask on the terminal; declines when stdin is not a terminal.
    Ask,
    /// Headless auto-accept.
    Always,
    /// Headless auto-decline.
    Never,
}

impl ZipInference {
    #[must_use]
    pub fn confirm(self, question: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Ask => ask_terminal(question),
        }
    }
}

fn ask_terminal(question: &str) -> bool {
    if !io::stdin().is_terminal() {
        return false;
    }
    let mut stderr = io::stderr();
    let stdin = io::stdin();
    loop {
        let _ = write!(stderr, "{question} [y/N]: ");
        let _ = stderr.flush();
        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "no" => return false,
            "y" | "yes" => return true,
            _ => {}
        }
    }
}
