//! Input Collector - the question sequence for one strategy.
//!
//! Asks, in order:
//! 1. the strategy name (unless given as an argument)
//! 2. method names, until a blank or `0` answer
//! 3. implementation names, under the same rule
//! 4. whether to generate pipelines (default: no)
//!
//! Between list questions the values gathered so far are echoed as a note.

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Prompter},
    domain::{StrategyBlueprint, StrategyName},
    error::StratagenResult,
};

pub const STRATEGY_NAME_LABEL: &str = "What is the strategy name?";
pub const STRATEGY_NAME_PLACEHOLDER: &str = "PaymentMethod";
pub const PIPELINE_LABEL: &str =
    "Do you want to create Pipelines (Chain of Responsibility) for the Strategy?";

/// Attempts at a non-empty strategy name before giving up.
const NAME_ATTEMPTS: usize = 3;

/// The two repeated-question lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameList {
    Methods,
    Implementations,
}

impl NameList {
    fn label(self, position: usize) -> String {
        let nth = ordinal(position);
        match self {
            Self::Methods => format!("What is the {nth} method name?"),
            Self::Implementations => format!("What is the {nth} concrete implementation name?"),
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Methods => "Type the method name, or press Enter to finish",
            Self::Implementations => "Type the implementation name, or press Enter to finish",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Self::Methods => "methods",
            Self::Implementations => "implementations",
        }
    }
}

/// Drives a [`Prompter`] through the question sequence.
pub struct InputCollector<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> InputCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Resolve the strategy name from `argument`, or prompt for it.
    ///
    /// An argument that normalises to nothing counts as absent. The prompt
    /// is required: blank answers are re-asked a few times, then rejected.
    pub fn strategy_name(&self, argument: Option<&str>) -> StratagenResult<StrategyName> {
        if let Some(raw) = argument {
            match StrategyName::parse(raw) {
                Ok(name) => return Ok(name),
                Err(e) => debug!(error = %e, "Ignoring empty strategy name argument"),
            }
        }

        for attempt in 1..=NAME_ATTEMPTS {
            let answer = self
                .prompter
                .text(STRATEGY_NAME_LABEL, STRATEGY_NAME_PLACEHOLDER)?;
            match StrategyName::parse(&answer) {
                Ok(name) => return Ok(name),
                Err(_) => debug!(attempt, "Strategy name answer was empty"),
            }
        }

        Err(ApplicationError::InputRequired {
            field: "strategy name",
        }
        .into())
    }

    /// Method names, in the order given.
    pub fn methods(&self, name: &StrategyName) -> StratagenResult<Vec<String>> {
        self.collect_list(name, NameList::Methods)
    }

    /// Implementation names, in the order given.
    pub fn implementations(&self, name: &StrategyName) -> StratagenResult<Vec<String>> {
        self.collect_list(name, NameList::Implementations)
    }

    pub fn pipeline(&self) -> StratagenResult<bool> {
        self.prompter.confirm(PIPELINE_LABEL, false)
    }

    /// Everything after the name: methods, implementations, pipeline flag.
    pub fn blueprint(&self, name: StrategyName) -> StratagenResult<StrategyBlueprint> {
        let methods = self.methods(&name)?;
        let implementations = self.implementations(&name)?;
        let pipeline = self.pipeline()?;
        Ok(StrategyBlueprint::new(name, methods, implementations, pipeline))
    }

    fn collect_list(&self, name: &StrategyName, list: NameList) -> StratagenResult<Vec<String>> {
        let mut values = Vec::new();

        loop {
            if !values.is_empty() {
                self.prompter
                    .note(&format!("{name} {}: {}", list.plural(), values.join(", ")))?;
            }

            let answer = self
                .prompter
                .text(&list.label(values.len() + 1), list.placeholder())?;
            if is_terminator(&answer) {
                break;
            }
            values.push(answer);
        }

        debug!(list = list.plural(), count = values.len(), "List collected");
        Ok(values)
    }
}

/// A blank answer or the literal `0` ends a list.
pub fn is_terminator(answer: &str) -> bool {
    answer.is_empty() || answer == "0"
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
