//! Line-based console I/O seam.
//!
//! The interactive workflow talks to the user exclusively through the
//! [`Console`] trait so tests can drive it with scripted input and capture
//! its output.

use std::io::{self, BufRead, Write};

/// Blocking line-based prompt/response I/O.
pub(crate) trait Console {
    /// Print `prompt` without a trailing newline, then block for one line.
    /// The returned line has the trailing newline stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print a line of output.
    fn say(&mut self, text: &str);

    /// Print a message and wait for the user to press enter.
    fn pause(&mut self, message: &str) -> io::Result<()> {
        self.read_line(message).map(|_| ())
    }
}

/// Console over process stdin/stdout.
pub(crate) struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Console driven by a fixed input script, capturing all output.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub(crate) output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed so far, one string for easy `contains` checks.
    pub(crate) fn output_text(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
