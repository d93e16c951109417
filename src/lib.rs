//! Symbol catalog loading.
//!
//! Tab definitions (`symbol_tabs/*.json`) and symbol files (`symbols/*.txt`)
//! are read from a [`ResourceProvider`], merged into one sorted list of
//! [`SymbolTab`]s, and published atomically by the [`SymbolManager`]. Two live
//! lists, favorites and custom kaomojis, come from user configuration instead
//! of resource files.

pub mod config;
pub mod definition;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod manager;
pub mod resource;
pub mod symbols;

pub use config::{ConfigFile, SymbolConfig};
pub use definition::{SymbolFileRef, TabDefinition};
pub use error::{IdentifierError, ReloadError, TabError};
pub use identifier::{DEFAULT_NAMESPACE, Identifier};
pub use manager::{
    Catalog, ReloadListener, SymbolManager, TabRef, Tabs, all_list_id, custom_kaomojis_list_id,
    favorites_list_id, listener_id,
};
pub use resource::{
    MemoryResources, PackStack, ResourceFinder, ResourceProvider, SYMBOL_FILES, SYMBOL_TABS,
};
pub use symbols::{
    MutableSymbolList, NamedVariant, SplitType, SymbolList, SymbolTab, Symbols, TabKind,
};

/// Namespace of the identifiers this crate defines itself.
pub const NAMESPACE: &str = "symbol_chat";

/// Split a path-list style value (`a:b` on unix, `a;b` on windows) into its
/// non-empty entries.
pub fn split_path_list(value: &std::ffi::OsStr) -> Vec<std::path::PathBuf> {
    std::env::split_paths(value)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn split_path_list_drops_empty_entries() {
        let joined = std::env::join_paths(["packs/base", "", "packs/overlay"]).unwrap();
        assert_eq!(
            split_path_list(&joined),
            vec![PathBuf::from("packs/base"), PathBuf::from("packs/overlay")]
        );
        assert!(split_path_list(&OsString::new()).is_empty());
    }
}
