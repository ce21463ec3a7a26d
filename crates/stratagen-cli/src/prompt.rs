//! Prompter selection for the CLI.
//!
//! Interactive terminals get dialoguer widgets; anything else (pipes,
//! redirected files, CI) falls back to one answer per line on stdin.

use std::io::{self, IsTerminal};

use stratagen_adapters::LinePrompter;
use stratagen_core::application::ports::Prompter;

/// Pick the prompter for this process.
pub fn select_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        if can_confirm() {
            tracing::debug!("using interactive prompter");
            return Box::new(interactive::DialoguerPrompter::new());
        }
    }

    tracing::debug!(tty = io::stdin().is_terminal(), "using line prompter");
    Box::new(LinePrompter::stdio())
}

/// `true` when a yes/no question can be put to the operator.
pub fn can_confirm() -> bool {
    cfg!(feature = "interactive") && io::stdin().is_terminal() && io::stderr().is_terminal()
}

#[cfg(feature = "interactive")]
pub mod interactive {
    use console::{Term, style};
    use dialoguer::{Confirm, Input, theme::ColorfulTheme};

    use stratagen_core::{
        application::{ApplicationError, ports::Prompter},
        error::{StratagenError, StratagenResult},
    };

    /// dialoguer-backed prompter; all widgets draw on stderr.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
        term: Term,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
                term: Term::stderr(),
            }
        }
    }

    impl Default for DialoguerPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for DialoguerPrompter {
        fn text(&self, label: &str, placeholder: &str) -> StratagenResult<String> {
            let prompt = if placeholder.is_empty() {
                label.to_owned()
            } else {
                format!("{label} {}", style(format!("({placeholder})")).dim())
            };

            Input::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(prompt_error)
        }

        fn confirm(&self, label: &str, default: bool) -> StratagenResult<bool> {
            Confirm::with_theme(&self.theme)
                .with_prompt(label)
                .default(default)
                .interact_on(&self.term)
                .map_err(prompt_error)
        }

        fn note(&self, message: &str) -> StratagenResult<()> {
            self.term
                .write_line(&style(message).dim().to_string())
                .map_err(|e| prompt_error(e.into()))
        }
    }

    fn prompt_error(err: dialoguer::Error) -> StratagenError {
        ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
        .into()
    }
}
