use crate::identifier::Identifier;
use crate::symbols::{NamedVariant, SymbolList};
use std::cmp::Ordering;
use std::sync::Arc;

/// What a tab holds, which decides how hosts lay it out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabKind {
    #[default]
    Symbols,
    Kaomojis,
}

impl NamedVariant for TabKind {
    const VARIANTS: &'static [Self] = &[TabKind::Symbols, TabKind::Kaomojis];

    fn name(self) -> &'static str {
        match self {
            TabKind::Symbols => "SYMBOLS",
            TabKind::Kaomojis => "KAOMOJIS",
        }
    }
}

/// One tab of the catalog: display metadata plus the lists it shows.
///
/// Lists are shared handles into the reload's list cache, so two tabs naming
/// the same symbol file point at the same `SymbolList`.
#[derive(Clone, Debug)]
pub struct SymbolTab {
    id: Identifier,
    icon: String,
    order: i32,
    kind: TabKind,
    search_bar: bool,
    lists: Vec<Arc<SymbolList>>,
}

impl SymbolTab {
    pub fn new(
        id: Identifier,
        icon: String,
        order: i32,
        kind: TabKind,
        search_bar: bool,
        lists: Vec<Arc<SymbolList>>,
    ) -> Self {
        Self {
            id,
            icon,
            order,
            kind,
            search_bar,
            lists,
        }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn kind(&self) -> TabKind {
        self.kind
    }

    pub fn has_search_bar(&self) -> bool {
        self.search_bar
    }

    /// The lists in declaration order.
    pub fn lists(&self) -> &[Arc<SymbolList>] {
        &self.lists
    }

    /// Total entries across all lists, duplicates included.
    pub fn symbol_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.lists.iter().any(|list| list.contains(symbol))
    }

    /// `order` ascending, then identifier; never `Equal` for distinct ids.
    pub fn total_order_cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
    }
}
