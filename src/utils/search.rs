//! Substring search helpers.

/// Escape character used in `LIKE ... ESCAPE '\'` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `query` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped so user input cannot
/// act as a wildcard. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use runner_app::utils::search::contains_pattern;
///
/// assert_eq!(contains_pattern("run"), "%run%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.trim().chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
