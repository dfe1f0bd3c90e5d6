/// Lowercases `value`, taking the ASCII fast path whenever possible.
pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

/// Strips optional whitespace (SP and HTAB) from both ends, per RFC 9110 `OWS`.
pub(crate) fn trim_ows(value: &str) -> &str {
    value.trim_matches(|ch| ch == ' ' || ch == '\t')
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
