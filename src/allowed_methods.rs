use crate::constants::method;

/// Uppercased allow-list of HTTP methods, kept in configured order without duplicates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    methods: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods. Blank entries are skipped.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods: Vec<String> = Vec::new();
        for value in values {
            let normalized = value.as_ref().trim().to_ascii_uppercase();
            if !normalized.is_empty() && !methods.contains(&normalized) {
                methods.push(normalized);
            }
        }

        Self { methods }
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.methods.iter()
    }

    /// `OPTIONS` is always allowed: it carries the preflight rather than naming the method
    /// being requested. Everything else must appear in the list, compared case-insensitively.
    pub fn is_allowed(&self, requested: &str) -> bool {
        let requested = requested.trim();
        if requested.eq_ignore_ascii_case(method::OPTIONS) {
            return true;
        }

        self.methods
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(requested))
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
