//! In-process resource provider.

use crate::identifier::Identifier;
use crate::resource::{ResourceFinder, ResourceProvider};
use std::collections::BTreeMap;
use std::io::{self, Read};

/// Resources held in memory, keyed by full resource path.
#[derive(Clone, Debug, Default)]
pub struct MemoryResources {
    files: BTreeMap<Identifier, String>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contents` at a full resource path, replacing any previous value.
    pub fn insert(&mut self, path: Identifier, contents: impl Into<String>) -> &mut Self {
        self.files.insert(path, contents.into());
        self
    }

    /// Store `contents` under the logical id `id` of `finder`'s kind.
    pub fn insert_as(
        &mut self,
        finder: ResourceFinder,
        id: &Identifier,
        contents: impl Into<String>,
    ) -> &mut Self {
        self.insert(finder.to_resource_path(id), contents)
    }

    pub fn remove(&mut self, path: &Identifier) -> Option<String> {
        self.files.remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ResourceProvider for MemoryResources {
    fn enumerate(&self, directory: &str, extension: &str) -> io::Result<Vec<Identifier>> {
        Ok(self
            .files
            .keys()
            .filter(|path| {
                path.path()
                    .strip_prefix(directory)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .is_some_and(|rest| rest.ends_with(extension))
            })
            .cloned()
            .collect())
    }

    fn open(&self, path: &Identifier) -> io::Result<Box<dyn Read + '_>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(contents.as_bytes())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("resource {path} not found"),
            )),
        }
    }
}
