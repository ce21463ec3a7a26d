//! Prompter with canned answers, for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use stratagen_core::{
    application::{ApplicationError, ports::Prompter},
    error::StratagenResult,
};

/// Answers text questions in order; confirmations from a separate queue.
///
/// Running out of answers behaves like end of input: empty text, default
/// confirmation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    state: Mutex<Script>,
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    confirmations: VecDeque<bool>,
    asked: Vec<String>,
    notes: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Mutex::new(Script {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Script::default()
            }),
        }
    }

    pub fn confirming(self, value: bool) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.confirmations.push_back(value);
        }
        self
    }

    /// Every question label asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.asked.clone())
            .unwrap_or_default()
    }

    pub fn notes(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.notes.clone())
            .unwrap_or_default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut Script) -> T) -> StratagenResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(f(&mut state))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, label: &str, _placeholder: &str) -> StratagenResult<String> {
        self.with_state(|state| {
            state.asked.push(label.to_owned());
            state.answers.pop_front().unwrap_or_default()
        })
    }

    fn confirm(&self, label: &str, default: bool) -> StratagenResult<bool> {
        self.with_state(|state| {
            state.asked.push(label.to_owned());
            state.confirmations.pop_front().unwrap_or(default)
        })
    }

    fn note(&self, message: &str) -> StratagenResult<()> {
        self.with_state(|state| state.notes.push(message.to_owned()))
    }
}
