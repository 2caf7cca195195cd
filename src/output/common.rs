//! Common utilities for output formatters

/// Quote a value for CSV output
/// Always wraps in double quotes, doubling embedded quotes (RFC 4180)
pub fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Build one fully quoted CSV line, newline included
pub fn csv_line<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = values
        .into_iter()
        .map(quote_csv)
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}
