//! Error types for catalog loading.

use crate::identifier::Identifier;
use std::io;
use thiserror::Error;

/// A string could not be turned into an [`Identifier`].
#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("identifier namespace must not be empty")]
    EmptyNamespace,

    #[error("identifier path must not be empty")]
    EmptyPath,

    #[error("non [a-z0-9_.-] character {character:?} in namespace '{namespace}'")]
    InvalidNamespace { namespace: String, character: char },

    #[error("non [a-z0-9/._-] character {character:?} in path '{path}'")]
    InvalidPath { path: String, character: char },
}

/// Why a single tab-definition resource could not be turned into a tab.
#[derive(Debug, Error)]
pub enum TabError {
    /// The resource could not be opened or read.
    #[error("failed to read tab definition: {0}")]
    Read(#[source] io::Error),

    /// The JSON is malformed or misses a required field.
    #[error("malformed tab definition: {0}")]
    Parse(#[source] serde_json::Error),

    /// A `symbols` entry names an invalid identifier.
    #[error("invalid symbol file reference: {0}")]
    Reference(#[source] IdentifierError),

    /// A `symbols` entry is an object without a usable `symbols` string.
    #[error("malformed symbol file reference {entry}")]
    MalformedReference { entry: String },
}

/// A reload aborted. The previously published catalog stays in place.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The provider could not list resources of one kind.
    #[error("failed to enumerate {directory} resources: {source}")]
    Enumerate {
        directory: &'static str,
        #[source]
        source: io::Error,
    },

    /// A tab-definition resource is unreadable or malformed.
    #[error("could not load symbol tab {id}: {source}")]
    Tab {
        id: Identifier,
        #[source]
        source: TabError,
    },

    /// A symbol file referenced by a tab is missing or unreadable.
    #[error("could not load symbols {id} (referenced by tab {tab}): {source}")]
    Symbols {
        id: Identifier,
        tab: Identifier,
        #[source]
        source: io::Error,
    },
}

impl ReloadError {
    /// The resource the failure is attributed to.
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            ReloadError::Enumerate { .. } => None,
            ReloadError::Tab { id, .. } | ReloadError::Symbols { id, .. } => Some(id),
        }
    }
}
