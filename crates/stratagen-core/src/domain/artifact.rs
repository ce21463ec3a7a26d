//! Artifacts and placeholder substitution.
//!
//! An [`Artifact`] is one file to render: which stub, where it goes, and what
//! to substitute. Stubs use bracketed tokens of the form `{{ key }}` (single
//! spaces inside the braces).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{common::RelativePath, error::DomainError};

/// Reserved placeholder filled in by the renderer from the destination path.
pub const NAMESPACE_KEY: &str = "namespace";

// ── StubId ────────────────────────────────────────────────────────────────────

/// Identifier of a stub template. Its string form is also the stub file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StubId {
    StrategyContract,
    StrategyImplementation,
    StrategyFactory,
    StrategyPipeline,
}

impl StubId {
    pub const ALL: [StubId; 4] = [
        StubId::StrategyContract,
        StubId::StrategyImplementation,
        StubId::StrategyFactory,
        StubId::StrategyPipeline,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrategyContract => "strategy-contract",
            Self::StrategyImplementation => "strategy-implementation",
            Self::StrategyFactory => "strategy-factory",
            Self::StrategyPipeline => "strategy-pipeline",
        }
    }

    /// `<id>.stub`
    pub fn file_name(&self) -> String {
        format!("{}.stub", self.as_str())
    }
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StubId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix(".stub").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStub(s.into()))
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The four kinds of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Contract,
    Implementation,
    Factory,
    Pipeline,
}

impl ArtifactKind {
    pub const fn stub(&self) -> StubId {
        match self {
            Self::Contract => StubId::StrategyContract,
            Self::Implementation => StubId::StrategyImplementation,
            Self::Factory => StubId::StrategyFactory,
            Self::Pipeline => StubId::StrategyPipeline,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Implementation => "implementation",
            Self::Factory => "factory",
            Self::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Substitutions ─────────────────────────────────────────────────────────────

/// A substitution value. Lists are joined with `\n` when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionValue {
    Single(String),
    List(Vec<String>),
}

impl SubstitutionValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Single(s) => Cow::Borrowed(s),
            Self::List(items) => Cow::Owned(items.join("\n")),
        }
    }
}

impl From<String> for SubstitutionValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&str> for SubstitutionValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<Vec<String>> for SubstitutionValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Ordered placeholder map. Keys are applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, SubstitutionValue)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SubstitutionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SubstitutionValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SubstitutionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubstitutionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `{{ key }}` token for every entry.
    ///
    /// Unknown tokens are left in place.
    pub fn apply(&self, template: &str) -> String {
        let mut result = template.to_owned();
        for (key, value) in &self.entries {
            result = result.replace(&token(key), &value.as_text());
        }
        result
    }
}

/// The bracketed token for `key`: `{{ key }}`.
pub fn token(key: &str) -> String {
    format!("{{{{ {key} }}}}")
}

/// Placeholder keys still present in rendered text, in order of appearance.
///
/// Only tokens whose inner text looks like a key (`[A-Za-z0-9_]+`) count, so
/// unrelated `{{ ... }}` text in a stub is not reported.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{ ") {
        let after = &rest[start + 3..];
        let Some(end) = after.find(" }}") else {
            break;
        };
        let key = &after[..end];
        if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            if !found.iter().any(|k| k == key) {
                found.push(key.to_owned());
            }
            rest = &after[end + 3..];
        } else {
            rest = after;
        }
    }

    found
}

// ── Artifact ──────────────────────────────────────────────────────────────────

/// One file to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    kind: ArtifactKind,
    destination: RelativePath,
    substitutions: Substitutions,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, destination: RelativePath, substitutions: Substitutions) -> Self {
        Self {
            kind,
            destination,
            substitutions,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn stub(&self) -> StubId {
        self.kind.stub()
    }

    /// Destination relative to the application source directory.
    pub fn destination(&self) -> &RelativePath {
        &self.destination
    }

    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_ids_parse_with_or_without_extension() {
        assert_eq!("strategy-factory".parse::<StubId>().unwrap(), StubId::StrategyFactory);
        assert_eq!(
            "strategy-pipeline.stub".parse::<StubId>().unwrap(),
            StubId::StrategyPipeline
        );
        assert!(matches!(
            "strategy-widget".parse::<StubId>(),
            Err(DomainError::UnknownStub(_))
        ));
    }

    #[test]
    fn every_kind_maps_to_its_own_stub() {
        let stubs: Vec<_> = [
            ArtifactKind::Contract,
            ArtifactKind::Implementation,
            ArtifactKind::Factory,
            ArtifactKind::Pipeline,
        ]
        .iter()
        .map(ArtifactKind::stub)
        .collect();
        assert_eq!(stubs, StubId::ALL);
    }

    #[test]
    fn apply_replaces_every_occurrence() {
        let subs = Substitutions::new().with("name", "PaymentMethod");
        let out = subs.apply("interface {{ name }}Contract {} // {{ name }}");
        assert_eq!(out, "interface PaymentMethodContract {} // PaymentMethod");
    }

    #[test]
    fn list_values_are_joined_with_newlines() {
        let subs = Substitutions::new().with("methods", vec!["a();".to_string(), "b();".to_string()]);
        assert_eq!(subs.apply("{\n{{ methods }}\n}"), "{\na();\nb();\n}");
    }

    #[test]
    fn empty_list_substitutes_empty_text() {
        let subs = Substitutions::new().with("methods", Vec::<String>::new());
        assert_eq!(subs.apply("[{{ methods }}]"), "[]");
    }

    #[test]
    fn unknown_tokens_are_left_in_place() {
        let subs = Substitutions::new().with("name", "X");
        assert_eq!(subs.apply("{{ name }} {{ other }}"), "X {{ other }}");
    }

    #[test]
    fn tokens_require_the_spaced_form() {
        let subs = Substitutions::new().with("name", "X");
        assert_eq!(subs.apply("{{name}}"), "{{name}}");
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut subs = Substitutions::new().with("a", "1").with("b", "2");
        subs.insert("a", "3");
        assert_eq!(subs.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(subs.get("a"), Some(&SubstitutionValue::Single("3".into())));
    }

    #[test]
    fn unresolved_placeholders_lists_leftover_keys_once() {
        let text = "{{ name }} {{ name }} {{ strategyNamespace }} {{ not a key }}";
        assert_eq!(unresolved_placeholders(text), ["name", "strategyNamespace"]);
    }

    #[test]
    fn unresolved_placeholders_is_empty_for_rendered_text() {
        assert!(unresolved_placeholders("final class CreditCard {}").is_empty());
    }
}
