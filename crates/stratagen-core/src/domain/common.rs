use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative** and to stay below the
/// directory it is joined onto.
///
/// Generated artifacts are addressed relative to the application source
/// directory. An absolute path or a `..` component would let a strategy or
/// implementation name write outside the project, so both are rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check_relative(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check_relative(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    /// Path segments as strings, in order.
    pub fn segments(&self) -> Vec<String> {
        self.0
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    /// Forward-slash rendering, independent of the host separator.
    pub fn to_slash_string(&self) -> String {
        self.segments().join("/")
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

fn check_relative(path: &Path) -> Result<(), DomainError> {
    let display = || path.display().to_string();

    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed { path: display() });
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return Err(DomainError::PathEscapesRoot { path: display() });
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_nested_segments() {
        let p = RelativePath::try_new("Strategies/PaymentMethod").unwrap();
        assert_eq!(p.segments(), vec!["Strategies", "PaymentMethod"]);
    }

    #[test]
    fn absolute_path_is_rejected() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_components_are_rejected() {
        let base = RelativePath::try_new("Strategies").unwrap();
        assert!(matches!(
            base.join("../../outside.php"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn display_uses_forward_slashes() {
        let p = RelativePath::try_new("Strategies")
            .unwrap()
            .join("Billing")
            .unwrap()
            .join("Contracts")
            .unwrap();
        assert_eq!(p.to_string(), "Strategies/Billing/Contracts");
    }
}
