/// Escapes a raw string and wraps it in double quotes.
///
/// Backslashes are doubled before quotes are escaped, otherwise the
/// backslashes inserted for the quotes would be doubled again.
///
/// ```rust
/// use search_query::common::escape_and_quote;
///
/// assert_eq!(escape_and_quote(r#"the "X""#), r#""the \"X\"""#);
/// ```
pub fn escape_and_quote(raw: &str) -> String {
    let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
    let mut quoted = String::with_capacity(escaped.len() + 2);
    quoted.push('"');
    quoted.push_str(&escaped);
    quoted.push('"');
    quoted
}
