//! Localized-string catalogue parsing.
//!
//! Add-ons ship their UI strings as a gettext PO file in which every
//! entry is keyed by a numeric id carried in the `msgctxt` field:
//!
//! ```text
//! msgctxt "#32000"
//! msgid "Search"
//! msgstr ""
//! ```
//!
//! Only the subset the host actually writes is handled here: `msgctxt`
//! ids, `msgid` source text, `msgstr` overrides, quoted continuation
//! lines, and the standard escapes. Anything else is skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse a `strings.po` file into an id -> text map.
///
/// A missing or unreadable file yields an empty catalogue; lookups then
/// resolve to the empty string rather than failing.
pub fn parse_po_file(path: &Path) -> HashMap<u32, String> {
    if !path.exists() {
        return HashMap::new();
    }

    match fs::read_to_string(path) {
        Ok(text) => parse_po(&text),
        Err(_) => HashMap::new(),
    }
}

enum Field {
    None,
    MsgId,
    MsgStr,
}

/// Parse PO text into an id -> text map.
///
/// The translated text (`msgstr`) wins when non-empty; otherwise the
/// source text (`msgid`) is used, which is the common case for the
/// English catalogue.
pub fn parse_po(text: &str) -> HashMap<u32, String> {
    let mut catalogue = HashMap::new();

    let mut current_id: Option<u32> = None;
    let mut msgid = String::new();
    let mut msgstr = String::new();
    let mut last_field = Field::None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("msgctxt") {
            flush_entry(&mut catalogue, &mut current_id, &mut msgid, &mut msgstr);
            current_id = parse_context_id(&quoted_value(rest));
            last_field = Field::None;
        } else if let Some(rest) = line.strip_prefix("msgid") {
            msgid = quoted_value(rest);
            last_field = Field::MsgId;
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            msgstr = quoted_value(rest);
            last_field = Field::MsgStr;
        } else if line.starts_with('"') {
            // Continuation of the preceding msgid/msgstr.
            match last_field {
                Field::MsgId => msgid.push_str(&quoted_value(line)),
                Field::MsgStr => msgstr.push_str(&quoted_value(line)),
                Field::None => {}
            }
        }
    }
    flush_entry(&mut catalogue, &mut current_id, &mut msgid, &mut msgstr);

    catalogue
}

fn flush_entry(
    catalogue: &mut HashMap<u32, String>,
    current_id: &mut Option<u32>,
    msgid: &mut String,
    msgstr: &mut String,
) {
    if let Some(id) = current_id.take() {
        let text = if msgstr.is_empty() { msgid.clone() } else { msgstr.clone() };
        catalogue.insert(id, text);
    }
    msgid.clear();
    msgstr.clear();
}

/// Extract the numeric id from a `msgctxt` value of the form `#32000`.
fn parse_context_id(value: &str) -> Option<u32> {
    value.strip_prefix('#')?.trim().parse().ok()
}

/// Take the content between the first and last double quote of `rest`,
/// with escapes decoded. Malformed lines yield an empty string.
fn quoted_value(rest: &str) -> String {
    let rest = rest.trim();
    let start = match rest.find('"') {
        Some(i) => i + 1,
        None => return String::new(),
    };
    let end = match rest.rfind('"') {
        Some(i) if i >= start => i,
        _ => return String::new(),
    };
    unescape(&rest[start..end])
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
# Addon strings
msgid ""
msgstr ""
"Language: en_gb\n"

msgctxt "#32000"
msgid "Search"
msgstr ""

msgctxt "#32001"
msgid "Search results"
msgstr "Resultats de recherche"

msgctxt "#32002"
msgid "A quoted \"word\" and a newline\n"
msgstr ""

msgctxt "#32003"
msgid "Split across "
"two lines"
msgstr ""
"##;

    #[test]
    fn msgid_used_when_msgstr_empty() {
        let catalogue = parse_po(SAMPLE);
        assert_eq!(catalogue.get(&32000).map(String::as_str), Some("Search"));
    }

    #[test]
    fn msgstr_overrides_msgid() {
        let catalogue = parse_po(SAMPLE);
        assert_eq!(
            catalogue.get(&32001).map(String::as_str),
            Some("Resultats de recherche")
        );
    }

    #[test]
    fn escapes_and_continuations_decode() {
        let catalogue = parse_po(SAMPLE);
        assert_eq!(
            catalogue.get(&32002).map(String::as_str),
            Some("A quoted \"word\" and a newline\n")
        );
        assert_eq!(
            catalogue.get(&32003).map(String::as_str),
            Some("Split across two lines")
        );
    }

    #[test]
    fn header_entry_without_context_is_skipped() {
        let catalogue = parse_po(SAMPLE);
        assert_eq!(catalogue.len(), 4);
    }

    #[test]
    fn missing_file_yields_empty_catalogue() {
        let catalogue = parse_po_file(Path::new("/nonexistent/strings.po"));
        assert!(catalogue.is_empty());
    }
}
