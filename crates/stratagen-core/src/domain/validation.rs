use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::strategy::StrategyBlueprint;

/// Which list a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameRole {
    Method,
    Implementation,
}

impl fmt::Display for NameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method => f.write_str("method"),
            Self::Implementation => f.write_str("implementation"),
        }
    }
}

/// A name that will render, but probably not as valid source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum NameIssue {
    Duplicate { role: NameRole, name: String },
    NotAnIdentifier { role: NameRole, name: String },
}

impl fmt::Display for NameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { role, name } => write!(f, "{role} '{name}' is listed more than once"),
            Self::NotAnIdentifier { role, name } => {
                write!(f, "{role} '{name}' is not a valid identifier")
            }
        }
    }
}

/// Centralized domain validation.
///
/// Collection stays permissive: these checks only report.
pub struct DomainValidator;

impl DomainValidator {
    pub fn name_issues(blueprint: &StrategyBlueprint) -> Vec<NameIssue> {
        let mut issues = check_names(NameRole::Method, blueprint.methods());
        issues.extend(check_names(NameRole::Implementation, blueprint.implementations()));
        issues
    }

    /// `[A-Za-z_][A-Za-z0-9_]*`
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

fn check_names(role: NameRole, names: &[String]) -> Vec<NameIssue> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut issues = Vec::new();

    for name in names {
        if !DomainValidator::is_identifier(name) {
            issues.push(NameIssue::NotAnIdentifier {
                role,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
            issues.push(NameIssue::Duplicate {
                role,
                name: name.clone(),
            });
        }
    }

    issues
}
