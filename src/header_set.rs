use crate::util::trim_ows;

/// Upper bound on empty list elements tolerated in one `Access-Control-Request-Headers` value.
///
/// RFC 9110 asks recipients to accept "a reasonable number" of empty elements. The count runs
/// across every field line of the request; the first element past the bound rejects the value,
/// so a run of commas costs at most `MAX_EMPTY_ELEMENTS + 1` iterations.
pub const MAX_EMPTY_ELEMENTS: usize = 16;

/// Canonical form of a header name: trimmed, each `-`-delimited segment title-cased.
///
/// `canonicalize_header_name("x-FOO-bar") == "X-Foo-Bar"`.
pub fn canonicalize_header_name(name: &str) -> String {
    let name = trim_ows(name);
    let mut canonical = String::with_capacity(name.len());
    canonicalize_into(name, &mut canonical);
    canonical
}

fn canonicalize_into(name: &str, buffer: &mut String) {
    buffer.clear();
    let mut upper = true;
    for ch in name.chars() {
        if upper {
            buffer.push(ch.to_ascii_uppercase());
        } else {
            buffer.push(ch.to_ascii_lowercase());
        }
        upper = ch == '-';
    }
}

/// Sorted, de-duplicated set of canonical header names.
///
/// Ordering is byte-wise lexicographic on the canonical form and does not depend on the order
/// or duplication of the names it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderAllowSet {
    names: Vec<String>,
    serialized: String,
    max_len: usize,
}

impl HeaderAllowSet {
    /// Builds the set, dropping names that are blank after trimming.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| canonicalize_header_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        names.sort_unstable();
        names.dedup();

        let serialized = names.join(",");
        let max_len = names.iter().map(String::len).max().unwrap_or(0);

        Self {
            names,
            serialized,
            max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Canonical names joined by `,` in set order.
    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = trim_ows(name);
        if name.is_empty() || name.len() > self.max_len {
            return false;
        }

        self.names
            .binary_search(&canonicalize_header_name(name))
            .is_ok()
    }

    /// Reports whether every name requested across `field_lines` belongs to the set.
    ///
    /// Lines are read as if joined by `,`. Elements are trimmed of OWS and empty elements are
    /// skipped, up to [`MAX_EMPTY_ELEMENTS`] of them. An element longer than the longest member
    /// is rejected before it is canonicalized.
    pub fn accepts<I, S>(&self, field_lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = String::new();

        visit_elements(field_lines, |name| {
            if name.len() > self.max_len {
                return false;
            }

            canonicalize_into(name, &mut buffer);
            self.names.binary_search(&buffer).is_ok()
        })
    }
}

/// Feeds each non-empty, OWS-trimmed element of a list-based field to `visit`.
///
/// Returns `false` as soon as `visit` does, or when the empty elements across all lines exceed
/// [`MAX_EMPTY_ELEMENTS`].
pub(crate) fn visit_elements<I, S, F>(field_lines: I, mut visit: F) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    let mut empty_elements = 0usize;

    for line in field_lines {
        for element in line.as_ref().split(',') {
            let element = trim_ows(element);
            if element.is_empty() {
                empty_elements += 1;
                if empty_elements > MAX_EMPTY_ELEMENTS {
                    return false;
                }
                continue;
            }

            if !visit(element) {
                return false;
            }
        }
    }

    true
}

impl<'a> IntoIterator for &'a HeaderAllowSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "header_set_test.rs"]
mod header_set_test;
