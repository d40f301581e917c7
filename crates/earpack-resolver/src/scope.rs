//! Where the classifier lookup of `find_unique` searches.

use std::fmt;
use std::str::FromStr;

/// Search scope for classifier based lookups.
///
/// The classic EAR resolver matched the requested classifier against the
/// whole artifact set, so a `sources` artifact of an unrelated dependency
/// could answer a query. [`ClassifierScope::Candidates`] restricts the match
/// to the group/name/type candidates; [`ClassifierScope::Repository`] keeps
/// the classic behaviour for projects that depend on it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierScope {
    #[default]
    Candidates,
    Repository,
}

impl ClassifierScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierScope::Candidates => "candidates",
            ClassifierScope::Repository => "repository",
        }
    }
}

impl fmt::Display for ClassifierScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized scope name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScope(pub String);

impl fmt::Display for UnknownScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown classifier scope {:?} (expected \"candidates\" or \"repository\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownScope {}

impl FromStr for ClassifierScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "candidates" => Ok(ClassifierScope::Candidates),
            "repository" | "legacy" => Ok(ClassifierScope::Repository),
            _ => Err(UnknownScope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope() {
        assert_eq!("candidates".parse(), Ok(ClassifierScope::Candidates));
        assert_eq!(" Repository ".parse(), Ok(ClassifierScope::Repository));
        assert_eq!("legacy".parse(), Ok(ClassifierScope::Repository));
        assert_eq!(
            "everywhere".parse::<ClassifierScope>(),
            Err(UnknownScope("everywhere".to_string()))
        );
    }

    #[test]
    fn test_default_is_candidates() {
        assert_eq!(ClassifierScope::default(), ClassifierScope::Candidates);
        assert_eq!(ClassifierScope::default().to_string(), "candidates");
    }
}
