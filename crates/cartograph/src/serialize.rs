//! Row serialization to comma-delimited text.
//!
//! Every field is wrapped in double quotes, and each `"` inside a field is
//! escaped with a backslash. The header line is written as given. Lines are
//! joined with `\n` and no trailing newline follows the last row.

/// A report row with a fixed column order.
pub trait Row {
    /// Field values in column order.
    fn fields(&self) -> Vec<&str>;
}

/// Quote a single field.
///
/// # Examples
///
/// ```
/// use cartograph::serialize::quote_field;
///
/// assert_eq!(quote_field(r#"say "hi" twice "x""#), r#""say \"hi\" twice \"x\"""#);
/// ```
pub fn quote_field(field: &str) -> String {
    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push('"');
    for ch in field.chars() {
        if ch == '"' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Render a single row as one line.
pub fn render_row<R: Row + ?Sized>(row: &R) -> String {
    row.fields()
        .into_iter()
        .map(quote_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render `header` followed by one line per row.
///
/// An empty row set yields the header followed by a single `\n`.
pub fn render<R: Row>(header: &str, rows: &[R]) -> String {
    let lines: Vec<String> = rows.iter().map(render_row).collect();
    format!("{header}\n{}", lines.join("\n"))
}
