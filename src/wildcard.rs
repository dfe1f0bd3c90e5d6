/// A `prefix*suffix` pattern compiled from an allowed-origin entry holding exactly one `*`.
///
/// The length check runs on the raw prefix and suffix, so a candidate must be long enough
/// to hold both without overlap: `foo*oof` never matches `foof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    prefix: String,
    suffix: String,
}

impl Wildcard {
    pub fn new<P, S>(prefix: P, suffix: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Splits `pattern` around its single `*`. Returns `None` unless exactly one `*` is present.
    pub fn parse(pattern: &str) -> Option<Self> {
        let (prefix, suffix) = pattern.split_once('*')?;
        if suffix.contains('*') {
            return None;
        }

        Some(Self::new(prefix, suffix))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, candidate: &str) -> bool {
        candidate.len() >= self.prefix.len() + self.suffix.len()
            && candidate.starts_with(&self.prefix)
            && candidate.ends_with(&self.suffix)
    }
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
