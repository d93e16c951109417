//! Ordered symbol collections.
//!
//! A [`SymbolList`] keeps symbols in source order next to a membership set.
//! File-backed lists are built once per reload and never written again. The
//! two live lists (favorites and custom kaomojis) are owned through a
//! [`MutableSymbolList`]; tabs share the same `Arc<SymbolList>` and observe
//! updates without a reload.

use crate::identifier::Identifier;
use crate::symbols::NamedVariant;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::io::{self, Read};
use std::ops::Deref;
use std::sync::Arc;

/// How raw symbol-file text becomes individual entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitType {
    /// One entry per code point. Variation selectors stay with the code point
    /// before them; ASCII whitespace separates entries and is dropped.
    #[default]
    Codepoint,
    /// One entry per non-blank line.
    Line,
}

impl NamedVariant for SplitType {
    const VARIANTS: &'static [Self] = &[SplitType::Codepoint, SplitType::Line];

    fn name(self) -> &'static str {
        match self {
            SplitType::Codepoint => "CODEPOINT",
            SplitType::Line => "LINE",
        }
    }
}

impl SplitType {
    /// Read the whole stream as UTF-8 and tokenize it.
    pub fn split(self, mut reader: impl Read) -> io::Result<Vec<String>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.tokenize(&text))
    }

    pub fn tokenize(self, text: &str) -> Vec<String> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        match self {
            SplitType::Codepoint => split_codepoints(text),
            SplitType::Line => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

fn split_codepoints(text: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    let mut can_attach = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            can_attach = false;
            continue;
        }
        if is_variation_selector(c) {
            if can_attach {
                if let Some(last) = symbols.last_mut() {
                    last.push(c);
                }
            }
            continue;
        }
        symbols.push(c.to_string());
        can_attach = true;
    }
    symbols
}

fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{fe00}'..='\u{fe0f}')
}

#[derive(Clone, Debug, Default)]
struct Entries {
    symbols: Vec<String>,
    members: HashSet<String>,
}

impl Entries {
    fn from_symbols(symbols: Vec<String>) -> Self {
        let members = symbols.iter().cloned().collect();
        Self { symbols, members }
    }

    fn push(&mut self, symbol: String) {
        self.members.insert(symbol.clone());
        self.symbols.push(symbol);
    }
}

/// An identified, ordered list of symbols.
///
/// Duplicates are kept: position matters for display and the catalog only
/// deduplicates whole lists by identifier.
#[derive(Debug)]
pub struct SymbolList {
    id: Identifier,
    entries: RwLock<Arc<Entries>>,
    live: bool,
}

impl SymbolList {
    /// A fixed list; the symbols are copied in and never change afterwards.
    pub fn new<S: Into<String>>(id: Identifier, symbols: impl IntoIterator<Item = S>) -> Self {
        let symbols = symbols.into_iter().map(Into::into).collect();
        Self {
            id,
            entries: RwLock::new(Arc::new(Entries::from_symbols(symbols))),
            live: false,
        }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Whether the contents can change through a [`MutableSymbolList`].
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Exact string match.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.read().members.contains(symbol)
    }

    /// The symbols in stored order.
    ///
    /// The iterator works on a snapshot: later updates to a live list do not
    /// affect an iteration already in progress. Clone it to restart.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            entries: self.entries.read().clone(),
            next: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.read().symbols.clone()
    }
}

/// Snapshot iterator returned by [`SymbolList::symbols`].
#[derive(Clone, Debug)]
pub struct Symbols {
    entries: Arc<Entries>,
    next: usize,
}

impl Iterator for Symbols {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let symbol = self.entries.symbols.get(self.next)?.clone();
        self.next += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.symbols.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols {}

/// Write access to a live list. Whoever owns this is the only writer.
#[derive(Debug)]
pub struct MutableSymbolList {
    list: Arc<SymbolList>,
}

impl MutableSymbolList {
    pub fn new(id: Identifier) -> Self {
        Self {
            list: Arc::new(SymbolList {
                id,
                entries: RwLock::new(Arc::new(Entries::default())),
                live: true,
            }),
        }
    }

    /// The shared list that tabs and the list cache hold on to.
    pub fn handle(&self) -> &Arc<SymbolList> {
        &self.list
    }

    pub fn clear(&self) {
        *self.list.entries.write() = Arc::new(Entries::default());
    }

    /// Append without deduplicating.
    pub fn add_symbol(&self, symbol: impl Into<String>) {
        let mut guard = self.list.entries.write();
        Arc::make_mut(&mut *guard).push(symbol.into());
    }

    /// Clear and repopulate in one step, so readers never see the list empty
    /// halfway through an update.
    pub fn replace_with<S: Into<String>>(&self, symbols: impl IntoIterator<Item = S>) {
        let symbols = symbols.into_iter().map(Into::into).collect();
        *self.list.entries.write() = Arc::new(Entries::from_symbols(symbols));
    }
}

impl Deref for MutableSymbolList {
    type Target = SymbolList;

    fn deref(&self) -> &SymbolList {
        &self.list
    }
}
