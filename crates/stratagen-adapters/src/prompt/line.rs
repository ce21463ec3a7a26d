//! Line-based prompter over any reader and writer.
//!
//! Used when stdin is not a terminal: one answer per line, end of input
//! answers empty (or the default, for confirmations).

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use stratagen_core::{
    application::{ApplicationError, ports::Prompter},
    error::{StratagenError, StratagenResult},
};

pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Questions on stderr, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    pub fn into_inner(self) -> StratagenResult<(R, W)> {
        self.io.into_inner().map_err(|_| lock_error())
    }

    /// Print `question` and read one line without its terminator; `None`
    /// at end of input. Other whitespace is kept.
    fn ask(&self, question: &str) -> StratagenResult<Option<String>> {
        let mut guard = self.io.lock().map_err(|_| lock_error())?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{question} ").map_err(prompt_error)?;
        writer.flush().map_err(prompt_error)?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            writeln!(writer).map_err(prompt_error)?;
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_owned()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&self, label: &str, placeholder: &str) -> StratagenResult<String> {
        let question = if placeholder.is_empty() {
            label.to_owned()
        } else {
            format!("{label} ({placeholder})")
        };
        Ok(self.ask(&question)?.unwrap_or_default())
    }

    fn confirm(&self, label: &str, default: bool) -> StratagenResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let question = format!("{label} {hint}");

        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(default);
            };
            let answer = answer.trim();
            match parse_yes_no(answer) {
                Some(value) => return Ok(value),
                None if answer.is_empty() => return Ok(default),
                None => self.note("Please answer yes or no.")?,
            }
        }
    }

    fn note(&self, message: &str) -> StratagenResult<()> {
        let mut guard = self.io.lock().map_err(|_| lock_error())?;
        writeln!(guard.1, "{message}").map_err(prompt_error)
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn prompt_error(e: io::Error) -> StratagenError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

fn lock_error() -> StratagenError {
    ApplicationError::PromptFailed {
        reason: "prompt state poisoned".into(),
    }
    .into()
}
