//! Token stream rendering for `quillc tokens`.

use quillc_lex::Item;
use serde::Serialize;

/// One token as it appears in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Canonical kind name, e.g. `name`, `==`, `while`
    pub kind: &'static str,
    /// 1-based line
    pub line: u32,
    /// 1-based column, in characters
    pub column: u32,
    /// Literal text; empty for punctuation and keywords
    pub value: String,
}

impl From<&Item> for TokenRecord {
    fn from(item: &Item) -> Self {
        Self {
            kind: item.kind.as_str(),
            line: item.position.line,
            column: item.position.column,
            value: item.value.clone(),
        }
    }
}

/// Renders one token per line: `<line>:<col>  <kind>  <value>`.
///
/// The value column is present only for integers, names and strings;
/// strings are shown with their quotes.
pub fn render_text(items: &[Item], show_positions: bool) -> String {
    let mut out = String::new();
    for item in items {
        if show_positions {
            out.push_str(&format!("{}  ", item.position));
        }
        out.push_str(item.kind.as_str());
        if item.kind.is_literal() {
            out.push_str("  ");
            out.push_str(&item.text());
        }
        out.push('\n');
    }
    out
}

/// Renders the items as a pretty-printed JSON array.
pub fn render_json(items: &[Item]) -> serde_json::Result<String> {
    let records: Vec<TokenRecord> = items.iter().map(TokenRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
