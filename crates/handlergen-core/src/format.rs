//! Source formatting for rendered templates.
//!
//! Rendered text is parsed with `syn` and printed back with `prettyplease`.
//! Plain `//` comments are not part of the syntax tree, so the leading comment
//! block (the generated-file marker) is split off first and re-attached to the
//! formatted output unchanged.

use crate::Error;

/// Format Rust source, keeping its leading `//` comment lines.
///
/// Returns [`Error::Format`] when the text after the header does not parse.
pub fn format_source(source: &str) -> crate::Result<String> {
    let (header, body) = split_header(source);

    let file = syn::parse_file(body)
        .map_err(|e| Error::format(format!("rendered source is not valid Rust: {}", e)))?;
    let formatted = prettyplease::unparse(&file);

    if header.is_empty() {
        Ok(formatted)
    } else {
        Ok(format!("{}\n\n{}", header.join("\n"), formatted))
    }
}

/// Split `source` into its leading `//` comment lines and the rest.
fn split_header(source: &str) -> (Vec<&str>, &str) {
    let mut header = Vec::new();
    let mut rest = source;

    while let Some(line) = rest.lines().next() {
        let trimmed = line.trim();
        let is_doc = trimmed.starts_with("///") || trimmed.starts_with("//!");
        if trimmed.starts_with("//") && !is_doc {
            header.push(trimmed);
        } else if !trimmed.is_empty() {
            break;
        }
        rest = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => "",
        };
    }

    (header, rest)
}
