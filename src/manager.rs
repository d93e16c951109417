//! Catalog orchestration.
//!
//! [`SymbolManager::reload`] walks every tab definition, resolves the symbol
//! files it references through a per-reload list cache, sorts the tabs, and
//! publishes the result as one [`Catalog`] snapshot. Nothing is published
//! unless the whole pass succeeds, so readers either see the previous catalog
//! or the new one.
//!
//! The favorites and custom-kaomoji lists live as long as the manager. They
//! are seeded into every reload's cache, so tabs that reference them by id
//! share the live list and pick up config updates without a reload.

use crate::NAMESPACE;
use crate::config::SymbolConfig;
use crate::definition::TabDefinition;
use crate::error::{ReloadError, TabError};
use crate::identifier::Identifier;
use crate::resource::{ResourceProvider, SYMBOL_FILES, SYMBOL_TABS};
use crate::symbols::{MutableSymbolList, NamedVariant, SplitType, SymbolList, SymbolTab, Symbols};
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::io;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, trace, warn};

/// Id under which the manager registers with a host's reload dispatcher.
pub fn listener_id() -> Identifier {
    Identifier::from_static(NAMESPACE, "symbols")
}

/// Id reserved for the combined "all symbols" view.
pub fn all_list_id() -> Identifier {
    Identifier::from_static(NAMESPACE, "all")
}

/// Id of the live favorites list; tab definitions may reference it.
pub fn favorites_list_id() -> Identifier {
    Identifier::from_static(NAMESPACE, "favorites")
}

/// Id of the live custom-kaomojis list; tab definitions may reference it.
pub fn custom_kaomojis_list_id() -> Identifier {
    Identifier::from_static(NAMESPACE, "custom_kaomojis")
}

/// Something a host calls whenever its resource set changes.
pub trait ReloadListener {
    fn identity(&self) -> Identifier;

    fn reload(&self, provider: &dyn ResourceProvider) -> Result<(), ReloadError>;
}

/// One published state: tabs in display order plus the list cache they were
/// resolved from.
#[derive(Debug)]
pub struct Catalog {
    tabs: Vec<SymbolTab>,
    lists: HashMap<Identifier, Arc<SymbolList>>,
}

impl Catalog {
    fn seeded(live: &[&MutableSymbolList]) -> Self {
        Self {
            tabs: Vec::new(),
            lists: seed_lists(live),
        }
    }

    pub fn tabs(&self) -> &[SymbolTab] {
        &self.tabs
    }

    pub fn tab(&self, id: &Identifier) -> Option<&SymbolTab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    pub fn list(&self, id: &Identifier) -> Option<&Arc<SymbolList>> {
        self.lists.get(id)
    }

    /// Distinct lists in the cache, live lists included.
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    fn tab_index(&self, id: &Identifier) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }
}

fn seed_lists(live: &[&MutableSymbolList]) -> HashMap<Identifier, Arc<SymbolList>> {
    live.iter()
        .map(|list| (list.id().clone(), Arc::clone(list.handle())))
        .collect()
}

/// The published tab sequence; keeps its catalog snapshot alive.
#[derive(Clone, Debug)]
pub struct Tabs {
    snap: Arc<Catalog>,
}

impl Deref for Tabs {
    type Target = [SymbolTab];

    fn deref(&self) -> &[SymbolTab] {
        &self.snap.tabs
    }
}

/// A single published tab; keeps its catalog snapshot alive.
#[derive(Clone, Debug)]
pub struct TabRef {
    snap: Arc<Catalog>,
    index: usize,
}

impl Deref for TabRef {
    type Target = SymbolTab;

    fn deref(&self) -> &SymbolTab {
        &self.snap.tabs[self.index]
    }
}

pub struct SymbolManager {
    favorites: MutableSymbolList,
    custom_kaomojis: MutableSymbolList,
    catalog: ArcSwap<Catalog>,
}

impl Default for SymbolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolManager {
    pub fn new() -> Self {
        let favorites = MutableSymbolList::new(favorites_list_id());
        let custom_kaomojis = MutableSymbolList::new(custom_kaomojis_list_id());
        let catalog = Catalog::seeded(&[&favorites, &custom_kaomojis]);
        Self {
            favorites,
            custom_kaomojis,
            catalog: ArcSwap::from_pointee(catalog),
        }
    }

    /// Rebuild the catalog from `provider` and publish it.
    ///
    /// Any unreadable or malformed tab definition or symbol file aborts the
    /// reload; the previously published catalog stays visible.
    pub fn reload<P: ResourceProvider + ?Sized>(&self, provider: &P) -> Result<(), ReloadError> {
        let _span = info_span!("symbol_reload").entered();
        let catalog = match self.build_catalog(provider) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("symbol reload failed, keeping the previous catalog");
                return Err(err);
            }
        };
        info!(
            tabs = catalog.tabs.len(),
            lists = catalog.lists.len(),
            "reloaded symbol catalog"
        );
        self.catalog.store(Arc::new(catalog));
        Ok(())
    }

    fn build_catalog<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<Catalog, ReloadError> {
        let tab_ids = SYMBOL_TABS.find_resources(provider).map_err(|source| {
            error!(directory = SYMBOL_TABS.directory(), error = %source, "could not list symbol tabs");
            ReloadError::Enumerate {
                directory: SYMBOL_TABS.directory(),
                source,
            }
        })?;

        let mut builder = CatalogBuilder::new(provider, &[&self.favorites, &self.custom_kaomojis]);
        let mut tabs = Vec::with_capacity(tab_ids.len());
        for id in tab_ids {
            tabs.push(builder.read_tab(id)?);
        }
        tabs.sort_by(SymbolTab::total_order_cmp);

        Ok(Catalog {
            tabs,
            lists: builder.lists,
        })
    }

    /// Refill the live lists from configuration. Tabs are left alone; those
    /// holding the live lists see the new contents immediately.
    pub fn on_config_reload<C: SymbolConfig + ?Sized>(&self, config: &C) {
        // One favorite per code point, with nothing filtered or joined.
        let favorites = config.favorite_symbols().chars().map(String::from);
        self.favorites.replace_with(favorites);
        self.custom_kaomojis
            .replace_with(config.custom_kaomojis().iter().cloned());
        debug!(
            favorites = self.favorites.len(),
            custom_kaomojis = self.custom_kaomojis.len(),
            "applied symbol config"
        );
    }

    /// The whole published state.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    pub fn tabs(&self) -> Tabs {
        Tabs {
            snap: self.snapshot(),
        }
    }

    /// First tab with this id, if any.
    pub fn tab(&self, id: &Identifier) -> Option<TabRef> {
        let snap = self.snapshot();
        let index = snap.tab_index(id)?;
        Some(TabRef { snap, index })
    }

    pub fn list(&self, id: &Identifier) -> Option<Arc<SymbolList>> {
        self.catalog.load().list(id).cloned()
    }

    pub fn is_favorite(&self, symbol: &str) -> bool {
        self.favorites.contains(symbol)
    }

    pub fn favorite_symbols(&self) -> Symbols {
        self.favorites.symbols()
    }

    pub fn favorites(&self) -> &Arc<SymbolList> {
        self.favorites.handle()
    }

    pub fn custom_kaomojis(&self) -> &Arc<SymbolList> {
        self.custom_kaomojis.handle()
    }

    /// A tab whose only list is the live favorites list itself, not merely a
    /// list with the same contents.
    pub fn is_only_favorites(&self, tab: &SymbolTab) -> bool {
        match tab.lists() {
            [only] => Arc::ptr_eq(only, self.favorites.handle()),
            _ => false,
        }
    }
}

impl ReloadListener for SymbolManager {
    fn identity(&self) -> Identifier {
        listener_id()
    }

    fn reload(&self, provider: &dyn ResourceProvider) -> Result<(), ReloadError> {
        SymbolManager::reload(self, provider)
    }
}

// Per-reload state. The cache owns each list; tabs get shared handles.
struct CatalogBuilder<'p, P: ?Sized> {
    provider: &'p P,
    lists: HashMap<Identifier, Arc<SymbolList>>,
    splits: HashMap<Identifier, SplitType>,
}

impl<'p, P: ResourceProvider + ?Sized> CatalogBuilder<'p, P> {
    fn new(provider: &'p P, live: &[&MutableSymbolList]) -> Self {
        Self {
            provider,
            lists: seed_lists(live),
            splits: HashMap::new(),
        }
    }

    fn read_tab(&mut self, id: Identifier) -> Result<SymbolTab, ReloadError> {
        let definition = self.read_definition(&id).map_err(|source| tab_error(&id, source))?;
        let kind = definition.tab_kind();

        let mut lists = Vec::with_capacity(definition.symbols.len());
        for entry in &definition.symbols {
            let Some((list_id, split)) = entry.resolve().map_err(|source| tab_error(&id, source))?
            else {
                warn!(tab = %id, ?entry, "ignoring null or array symbols entry");
                continue;
            };
            lists.push(self.resolve_list(&id, list_id, split)?);
        }

        trace!(tab = %id, order = definition.order, lists = lists.len(), "read symbol tab");
        Ok(SymbolTab::new(
            id,
            definition.icon,
            definition.order,
            kind,
            definition.search_bar,
            lists,
        ))
    }

    fn read_definition(&self, id: &Identifier) -> Result<TabDefinition, TabError> {
        let reader = SYMBOL_TABS.open(self.provider, id).map_err(TabError::Read)?;
        TabDefinition::from_reader(reader).map_err(|err| {
            if err.is_io() {
                TabError::Read(io::Error::from(err))
            } else {
                TabError::Parse(err)
            }
        })
    }

    // Each id is read at most once per reload; later references share it.
    fn resolve_list(
        &mut self,
        tab: &Identifier,
        id: Identifier,
        split: SplitType,
    ) -> Result<Arc<SymbolList>, ReloadError> {
        if let Some(list) = self.lists.get(&id) {
            if let Some(first) = self.splits.get(&id).filter(|first| **first != split) {
                debug!(
                    list = %id,
                    tab = %tab,
                    requested = split.name(),
                    loaded = first.name(),
                    "symbol list already loaded with a different split"
                );
            }
            trace!(list = %id, tab = %tab, "reusing cached symbol list");
            return Ok(Arc::clone(list));
        }

        let symbols = SYMBOL_FILES
            .open(self.provider, &id)
            .and_then(|reader| split.split(reader))
            .map_err(|source| {
                error!(list = %id, tab = %tab, error = %source, "could not load symbols");
                ReloadError::Symbols {
                    id: id.clone(),
                    tab: tab.clone(),
                    source,
                }
            })?;
        debug!(list = %id, split = split.name(), symbols = symbols.len(), "loaded symbol list");

        let list = Arc::new(SymbolList::new(id.clone(), symbols));
        self.splits.insert(id.clone(), split);
        self.lists.insert(id, Arc::clone(&list));
        Ok(list)
    }
}

fn tab_error(id: &Identifier, source: TabError) -> ReloadError {
    error!(tab = %id, error = %source, "could not load symbol tab");
    ReloadError::Tab {
        id: id.clone(),
        source,
    }
}
