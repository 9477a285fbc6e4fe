//! String builders for declarations, blocks, rules and comments.
//!
//! These produce the exact whitespace layout used throughout generated
//! stylesheets: tab-indented declarations, braces on their own lines, selectors
//! separated by `,\n` and a blank line after each rule.

/// Builds a declaration: `"\t{name}: {v1, v2, …};"`.
///
/// ```rust
/// use dumb_templates::css::declaration;
///
/// assert_eq!(
///     declaration("font-family", ["Times New Roman", "serif"]),
///     "\tfont-family: Times New Roman, serif;"
/// );
/// ```
pub fn declaration<I>(name: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    format!("\t{}: {};", name, join_with(values, ", "))
}

/// Builds a declaration block: `"{\n" + lines + "\n}"`.
///
/// Lines are taken as given, so raw declaration text can be mixed with
/// [`declaration`] output.
///
/// ```rust
/// use dumb_templates::css::{block, declaration};
///
/// assert_eq!(
///     block([declaration("margin", ["0"]), "padding: 0".to_string()]),
///     "{\n\tmargin: 0;\npadding: 0\n}"
/// );
/// ```
pub fn block<I>(declarations: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    format!("{{\n{}\n}}", join_with(declarations, "\n"))
}

/// Builds a rule: selectors joined by `",\n"`, a space, the block and a blank line.
///
/// ```rust
/// use dumb_templates::css::rule;
///
/// assert_eq!(rule("{\n\tcolor: red;\n}", [".danger"]), ".danger {\n\tcolor: red;\n}\n\n");
/// ```
pub fn rule<I>(block: &str, selectors: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    format!("{} {}\n\n", join_with(selectors, ",\n"), block)
}

/// Builds a comment on its own line: `"\n/* {text} */\n"`.
pub fn comment(text: &str) -> String {
    format!("\n/* {} */\n", text)
}

fn join_with<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}
