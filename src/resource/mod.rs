//! Resource provider contract.
//!
//! The catalog never touches the filesystem directly. It asks a
//! [`ResourceProvider`] to list resources under a directory and to open them
//! by identifier. Pack merging and override rules belong to the provider;
//! [`PackStack`] is the filesystem implementation and [`MemoryResources`] the
//! in-process one.

pub mod directory;
pub mod memory;

pub use directory::PackStack;
pub use memory::MemoryResources;

use crate::identifier::Identifier;
use std::io::{self, Read};

/// Source of raw resources keyed by identifier.
///
/// Identifiers handed to and returned from a provider are full resource paths
/// such as `ns:symbols/arrows.txt`; [`ResourceFinder`] maps them to and from
/// the logical ids used by the catalog.
pub trait ResourceProvider {
    /// Every resource whose path sits under `directory/` and ends with
    /// `extension`, sorted and without duplicates.
    fn enumerate(&self, directory: &str, extension: &str) -> io::Result<Vec<Identifier>>;

    /// Open one resource for reading.
    fn open(&self, path: &Identifier) -> io::Result<Box<dyn Read + '_>>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn enumerate(&self, directory: &str, extension: &str) -> io::Result<Vec<Identifier>> {
        (**self).enumerate(directory, extension)
    }

    fn open(&self, path: &Identifier) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

/// Locates one kind of resource: a directory plus a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceFinder {
    directory: &'static str,
    extension: &'static str,
}

/// Tab-definition JSON files under `symbol_tabs/`.
pub const SYMBOL_TABS: ResourceFinder = ResourceFinder::new("symbol_tabs", ".json");

/// Plain-text symbol files under `symbols/`.
pub const SYMBOL_FILES: ResourceFinder = ResourceFinder::new("symbols", ".txt");

impl ResourceFinder {
    pub(crate) const fn new(directory: &'static str, extension: &'static str) -> Self {
        Self {
            directory,
            extension,
        }
    }

    pub fn directory(&self) -> &'static str {
        self.directory
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// `ns:foo` -> `ns:<directory>/foo<extension>`.
    pub fn to_resource_path(&self, id: &Identifier) -> Identifier {
        // Directory and extension only contain path characters.
        id.wrap_path(self.directory, self.extension)
    }

    /// Inverse of [`to_resource_path`](Self::to_resource_path); `None` when
    /// the path does not belong to this finder.
    pub fn to_resource_id(&self, path: &Identifier) -> Option<Identifier> {
        let inner = path
            .path()
            .strip_prefix(self.directory)?
            .strip_prefix('/')?
            .strip_suffix(self.extension)?;
        path.with_path(inner).ok()
    }

    /// Logical ids of every matching resource, in provider order.
    pub fn find_resources<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> io::Result<Vec<Identifier>> {
        let paths = provider.enumerate(self.directory, self.extension)?;
        Ok(paths
            .iter()
            .filter_map(|path| self.to_resource_id(path))
            .collect())
    }

    /// Open the resource behind a logical id.
    pub fn open<'p, P: ResourceProvider + ?Sized>(
        &self,
        provider: &'p P,
        id: &Identifier,
    ) -> io::Result<Box<dyn Read + 'p>> {
        provider.open(&self.to_resource_path(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_ids_to_resource_paths_and_back() {
        let id = Identifier::parse("symbol_chat:arrows/basic").unwrap();
        let path = SYMBOL_FILES.to_resource_path(&id);
        assert_eq!(path.to_string(), "symbol_chat:symbols/arrows/basic.txt");
        assert_eq!(SYMBOL_FILES.to_resource_id(&path), Some(id));
    }

    #[test]
    fn foreign_paths_are_not_resource_ids() {
        let wrong_dir = Identifier::parse("ns:symbol_tabs/faces.json").unwrap();
        assert_eq!(SYMBOL_FILES.to_resource_id(&wrong_dir), None);

        let wrong_ext = Identifier::parse("ns:symbols/faces.json").unwrap();
        assert_eq!(SYMBOL_FILES.to_resource_id(&wrong_ext), None);

        let prefix_only = Identifier::parse("ns:symbolsextra/faces.txt").unwrap();
        assert_eq!(SYMBOL_FILES.to_resource_id(&prefix_only), None);
    }
}
