//! Filesystem provider over layered resource packs.
//!
//! Each pack root follows the `assets/<namespace>/<directory>/...` layout.
//! Packs are listed lowest priority first: when two packs ship the same
//! resource path, the later pack wins on `open`, while `enumerate` reports the
//! path once.

use crate::identifier::Identifier;
use crate::resource::ResourceProvider;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const ASSETS_DIR: &str = "assets";

#[derive(Clone, Debug, Default)]
pub struct PackStack {
    roots: Vec<PathBuf>,
}

impl PackStack {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    /// Add a pack on top of the existing ones.
    pub fn push(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Highest-priority file backing `path`, if any pack has it.
    pub fn resolve(&self, path: &Identifier) -> io::Result<Option<PathBuf>> {
        let relative = relative_file_path(path)?;
        for root in self.roots.iter().rev() {
            let candidate = root.join(ASSETS_DIR).join(path.namespace()).join(&relative);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

impl ResourceProvider for PackStack {
    fn enumerate(&self, directory: &str, extension: &str) -> io::Result<Vec<Identifier>> {
        let mut found = BTreeSet::new();
        for root in &self.roots {
            let assets = root.join(ASSETS_DIR);
            if !assets.is_dir() {
                debug!(pack = %root.display(), "pack has no assets directory");
                continue;
            }
            for namespace_dir in sorted_entries(&assets)? {
                if !namespace_dir.is_dir() {
                    continue;
                }
                let Some(namespace) = namespace_dir.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let base = namespace_dir.join(directory);
                if !base.is_dir() {
                    continue;
                }
                collect_files(&base, directory, extension, &mut |relative: String| {
                    match Identifier::new(namespace, &relative) {
                        Ok(id) => {
                            found.insert(id);
                        }
                        Err(err) => {
                            warn!(
                                pack = %root.display(),
                                namespace,
                                path = %relative,
                                error = %err,
                                "ignoring resource with invalid identifier"
                            );
                        }
                    }
                })?;
            }
        }
        Ok(found.into_iter().collect())
    }

    fn open(&self, path: &Identifier) -> io::Result<Box<dyn Read + '_>> {
        let Some(file) = self.resolve(path)? else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("resource {path} not found in any pack"),
            ));
        };
        let handle = File::open(&file)?;
        Ok(Box::new(BufReader::new(handle)))
    }
}

// Identifier paths use `/`; reject segments that would escape the namespace.
fn relative_file_path(path: &Identifier) -> io::Result<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in path.path().split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("resource path {path} contains an empty or relative segment"),
            ));
        }
        relative.push(segment);
    }
    Ok(relative)
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

fn collect_files(
    dir: &Path,
    prefix: &str,
    extension: &str,
    found: &mut dyn FnMut(String),
) -> io::Result<()> {
    for entry in sorted_entries(dir)? {
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %entry.display(), "ignoring non UTF-8 resource name");
            continue;
        };
        let relative = format!("{prefix}/{name}");
        if entry.is_dir() {
            collect_files(&entry, &relative, extension, found)?;
        } else if name.ends_with(extension) {
            found(relative);
        }
    }
    Ok(())
}
