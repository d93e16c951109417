#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use symbolchat::{Identifier, ResourceProvider};
use tempfile::TempDir;

// A resource pack on disk that is removed when dropped.
pub struct FixturePack {
    dir: TempDir,
}

impl FixturePack {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture pack")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn root_buf(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write `symbol_tabs/<path>.json` for the tab `ns:path`.
    pub fn tab(&self, id: &str, definition: &Value) -> Result<&Self> {
        self.write(id, "symbol_tabs", ".json", &definition.to_string())
    }

    /// Write raw text as a tab definition, for malformed fixtures.
    pub fn raw_tab(&self, id: &str, text: &str) -> Result<&Self> {
        self.write(id, "symbol_tabs", ".json", text)
    }

    /// Write `symbols/<path>.txt` for the symbol file `ns:path`.
    pub fn symbols(&self, id: &str, text: &str) -> Result<&Self> {
        self.write(id, "symbols", ".txt", text)
    }

    pub fn remove_tab(&self, id: &str) -> Result<()> {
        let path = self.resource_file(id, "symbol_tabs", ".json")?;
        fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))
    }

    fn write(&self, id: &str, directory: &str, extension: &str, text: &str) -> Result<&Self> {
        let path = self.resource_file(id, directory, extension)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(self)
    }

    fn resource_file(&self, id: &str, directory: &str, extension: &str) -> Result<PathBuf> {
        let id = Identifier::parse(id)?;
        Ok(self
            .root()
            .join("assets")
            .join(id.namespace())
            .join(directory)
            .join(format!("{}{extension}", id.path())))
    }
}

pub fn id(raw: &str) -> Identifier {
    Identifier::parse(raw).expect("fixture identifier must be valid")
}

// Wraps a provider and counts how often each resource is opened.
pub struct CountingProvider<P> {
    inner: P,
    opened: RefCell<BTreeMap<Identifier, usize>>,
}

impl<P: ResourceProvider> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            opened: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn opens(&self, path: &str) -> usize {
        self.opened.borrow().get(&id(path)).copied().unwrap_or(0)
    }
}

impl<P: ResourceProvider> ResourceProvider for CountingProvider<P> {
    fn enumerate(&self, directory: &str, extension: &str) -> io::Result<Vec<Identifier>> {
        self.inner.enumerate(directory, extension)
    }

    fn open(&self, path: &Identifier) -> io::Result<Box<dyn Read + '_>> {
        *self.opened.borrow_mut().entry(path.clone()).or_insert(0) += 1;
        self.inner.open(path)
    }
}
