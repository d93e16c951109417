//! Tab-definition file format.
//!
//! One JSON object per file under `symbol_tabs/`:
//!
//! ```json
//! {
//!   "icon": "☺",
//!   "order": 3,
//!   "type": "SYMBOLS",
//!   "search_bar": true,
//!   "symbols": ["symbol_chat:faces", {"symbols": "symbol_chat:kaomojis", "split": "LINE"}]
//! }
//! ```
//!
//! `icon` and `order` are required. Unknown `type`/`split` names fall back to
//! their defaults rather than failing the file. Numbers and booleans in
//! reference position are read through their string form.

use crate::error::TabError;
use crate::identifier::Identifier;
use crate::symbols::{NamedVariant, SplitType, TabKind};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

#[derive(Clone, Debug, Deserialize)]
pub struct TabDefinition {
    pub icon: String,
    pub order: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub search_bar: bool,
    #[serde(default)]
    pub symbols: Vec<SymbolFileRef>,
}

/// One entry of a tab's `symbols` array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SymbolFileRef {
    /// `"ns:path"`, split by code point.
    Bare(String),
    /// `{"symbols": "ns:path", "split": "LINE"}`.
    Detailed {
        symbols: Value,
        #[serde(default)]
        split: Option<Value>,
    },
    /// Anything else. Numbers and booleans name a file, objects are
    /// malformed, arrays and null are skipped.
    Other(Value),
}

impl TabDefinition {
    pub fn from_reader(reader: impl Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn tab_kind(&self) -> TabKind {
        TabKind::get_or_default(self.kind.as_deref(), TabKind::Symbols)
    }
}

impl SymbolFileRef {
    /// The referenced symbol file and how to split it; `Ok(None)` for entries
    /// that carry no reference.
    pub fn resolve(&self) -> Result<Option<(Identifier, SplitType)>, TabError> {
        match self {
            SymbolFileRef::Bare(raw) => {
                let id = Identifier::parse(raw).map_err(TabError::Reference)?;
                Ok(Some((id, SplitType::Codepoint)))
            }
            SymbolFileRef::Detailed { symbols, split } => {
                let Some(raw) = primitive_string(symbols) else {
                    return Err(TabError::MalformedReference {
                        entry: serde_json::json!({ "symbols": symbols }).to_string(),
                    });
                };
                let id = Identifier::parse(&raw).map_err(TabError::Reference)?;
                let split = split.as_ref().and_then(primitive_string);
                let split = SplitType::get_or_default(split.as_deref(), SplitType::Codepoint);
                Ok(Some((id, split)))
            }
            SymbolFileRef::Other(entry @ Value::Object(_)) => Err(TabError::MalformedReference {
                entry: entry.to_string(),
            }),
            SymbolFileRef::Other(entry) => match primitive_string(entry) {
                Some(raw) => {
                    let id = Identifier::parse(&raw).map_err(TabError::Reference)?;
                    Ok(Some((id, SplitType::Codepoint)))
                }
                None => Ok(None),
            },
        }
    }
}

fn primitive_string(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
