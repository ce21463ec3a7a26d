//! Prompter adapters.

mod line;
mod scripted;

pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;
