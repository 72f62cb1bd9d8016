//! Composition settings.
//!
//! Primitive key/value settings consumed only to select which provider a
//! preset installs as a default. No schema validation happens here beyond
//! "the value a preset needs is present and non-empty"; an absent value means
//! the preset installs no default for that slot, which surfaces later as an
//! unresolved-capability failure if the slot is mandatory.
//!
//! Replacing the original framework's ambient "current connection string"
//! statics, settings travel explicitly: host configuration deserializes into
//! this struct and is passed into preset construction.

use serde::{Deserialize, Serialize};

/// Primitive settings a host supplies to composition presets.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompositionSettings {
    /// Connection string of the main repository database.
    pub connection_string: Option<String>,
    /// Connection string of the security database. Falls back to
    /// [`connection_string`](Self::connection_string) when absent.
    pub security_connection_string: Option<String>,
    /// Endpoint of a remote search service.
    pub search_endpoint: Option<String>,
    /// Directory of a node-local search index.
    pub index_directory: Option<String>,
}

impl CompositionSettings {
    /// The main connection string, if usable.
    pub fn connection(&self) -> Option<&str> {
        usable(self.connection_string.as_deref())
    }

    /// The security connection string, falling back to the main one.
    pub fn security_connection(&self) -> Option<&str> {
        usable(self.security_connection_string.as_deref()).or_else(|| self.connection())
    }

    /// The remote search endpoint, if usable.
    pub fn search_endpoint(&self) -> Option<&str> {
        usable(self.search_endpoint.as_deref())
    }

    /// The local index directory, if usable.
    pub fn index_directory(&self) -> Option<&str> {
        usable(self.index_directory.as_deref())
    }
}

fn usable(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
