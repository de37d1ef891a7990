//! Interactive yes/no and new-version questions.

use std::io::{BufRead, Write};

use crate::error::{tagged, Result};

/// Text of the yes/no question, embedding the current version.
pub fn ask_text(current: &str) -> String {
    tagged(format!(
        "Version of project: {current}; Would you like to change it? [y/N]: "
    ))
}

/// Text asking for the new version.
pub fn ask_version_text() -> String {
    tagged("Please provide new version number: ")
}

/// States of the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    Prompting,
    Confirmed,
    Aborted,
}

impl PromptState {
    /// Transition on one line of input (`None` = end of input).
    ///
    /// `y`/`Y` confirms; `n`/`N`/empty or end of input aborts; anything else
    /// keeps prompting. Terminal states absorb further input.
    pub fn advance(self, answer: Option<&str>) -> PromptState {
        match self {
            PromptState::Prompting => match answer {
                None => PromptState::Aborted,
                Some(line) => match trim_newline(line) {
                    "y" | "Y" => PromptState::Confirmed,
                    "n" | "N" | "" => PromptState::Aborted,
                    _ => PromptState::Prompting,
                },
            },
            done => done,
        }
    }
}

/// A question/answer session over any line source and sink.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Ask whether to change `current`, re-asking until the answer is decisive.
    /// Returns `true` when the user confirmed.
    pub fn confirm(&mut self, current: &str) -> Result<bool> {
        writeln!(self.output)?;
        let mut state = PromptState::Prompting;
        while state == PromptState::Prompting {
            let answer = self.ask(&ask_text(current))?;
            state = state.advance(answer.as_deref());
        }
        Ok(state == PromptState::Confirmed)
    }

    /// Ask for the new version. `None` at end of input.
    pub fn new_version(&mut self) -> Result<Option<String>> {
        Ok(self
            .ask(&ask_version_text())?
            .map(|line| line.trim().to_string()))
    }

    /// Print a line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
