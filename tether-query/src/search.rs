//! Search-term escaping for LIKE patterns.

/// Escape `%`, `_`, and `\` in a user search term so it can be embedded in
/// a SQL LIKE pattern (with `ESCAPE '\'`) without acting as wildcards.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn plain_terms_pass_through() {
        assert_eq!(escape_like("fido"), "fido");
        assert_eq!(escape_like(""), "");
    }
}
