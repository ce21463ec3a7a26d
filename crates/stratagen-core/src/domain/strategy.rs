//! Strategy naming and the collected blueprint.
//!
//! A strategy name is free-form user input that reads like a path
//! (`Billing/PaymentMethod`, `Billing\PaymentMethod`, ` /PaymentMethod/ `).
//! [`StrategyName::parse`] turns it into one canonical form:
//!
//! | Input                      | `path()`                | `class_name()`  |
//! |----------------------------|-------------------------|-----------------|
//! | `PaymentMethod`            | `PaymentMethod`         | `PaymentMethod` |
//! | ` /PaymentMethod\ `        | `PaymentMethod`         | `PaymentMethod` |
//! | `Billing\PaymentMethod`    | `Billing/PaymentMethod` | `PaymentMethod` |
//! | `Billing//PaymentMethod`   | `Billing/PaymentMethod` | `PaymentMethod` |

use std::fmt;

use crate::domain::error::DomainError;

/// Characters stripped from both ends of raw input.
const TRIM_CHARS: [char; 3] = ['/', '\\', ' '];

/// Canonical separator inside a normalised path.
pub const SEPARATOR: char = '/';

/// A normalised strategy name.
///
/// Invariant: `path` is non-empty, uses `/` as its only separator and has no
/// empty segments. Segments carry no surrounding spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrategyName {
    path: String,
}

impl StrategyName {
    /// Normalise raw input. Idempotent: parsing `name.path()` again yields
    /// the same name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim_matches(|c| TRIM_CHARS.contains(&c));

        let path = trimmed
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        if path.is_empty() {
            return Err(DomainError::EmptyStrategyName { input: raw.into() });
        }

        Ok(Self { path })
    }

    /// Full normalised path, e.g. `Billing/PaymentMethod`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment, e.g. `PaymentMethod`.
    pub fn class_name(&self) -> &str {
        self.path
            .rsplit(SEPARATOR)
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(SEPARATOR)
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Everything the collector gathered for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyBlueprint {
    name: StrategyName,
    methods: Vec<String>,
    implementations: Vec<String>,
    pipeline: bool,
}

impl StrategyBlueprint {
    pub fn new(
        name: StrategyName,
        methods: Vec<String>,
        implementations: Vec<String>,
        pipeline: bool,
    ) -> Self {
        Self {
            name,
            methods,
            implementations,
            pipeline,
        }
    }

    pub fn name(&self) -> &StrategyName {
        &self.name
    }

    /// Method names in declaration order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Implementation names in input order.
    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }

    /// Whether a pipeline artifact and `getPipelines` methods are generated.
    pub fn pipeline(&self) -> bool {
        self.pipeline
    }

    /// Number of files [`plan_artifacts`](crate::domain::plan_artifacts)
    /// produces for this blueprint.
    pub fn artifact_count(&self) -> usize {
        let implementations = if self.implementations.is_empty() {
            0
        } else {
            self.implementations.len() + 1
        };
        1 + implementations + usize::from(self.pipeline)
    }
}
