//! Property persistence for service configuration state.
//!
//! The host server usually owns durable key/value configuration; the service
//! only requires the small contract below. Two implementations ship with the
//! crate: an in-memory store for hosts that persist elsewhere (and for
//! tests), and a write-through TOML file store.

use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Typed key/value persistence with caller-supplied defaults.
///
/// Reads fall back to the passed default when the key is unset. Writes must
/// be immediately visible to subsequent reads from any thread. Individual
/// operations are atomic; there is no cross-call transactionality.
pub trait PropertyStore: Send + Sync {
    /// Get a string property, or `default` when unset.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Set a string property.
    fn set_string(&self, key: &str, value: &str);

    /// Get a boolean property, or `default` when unset or unparsable.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_string(key, "") {
            s if s.is_empty() => default,
            s => s.parse().unwrap_or(default),
        }
    }

    /// Set a boolean property.
    fn set_bool(&self, key: &str, value: bool) {
        self.set_string(key, if value { "true" } else { "false" });
    }
}

/// In-memory property store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    props: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.props
            .get(key)
            .map(|v| v.value().clone())
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }
}

/// Write-through property store backed by a flat TOML table on disk.
///
/// The whole table is rewritten on every set, so a successful write is
/// durable before the call returns. Write failures are logged and swallowed;
/// the in-memory view stays authoritative for the running process.
pub struct TomlStore {
    path: PathBuf,
    props: Mutex<BTreeMap<String, String>>,
}

impl TomlStore {
    /// Open a store at `path`, loading any existing properties.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let props = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            props: Mutex::new(props),
        })
    }

    fn persist(&self, props: &BTreeMap<String, String>) {
        let content = match toml::to_string(props) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to serialize properties");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist properties");
        }
    }
}

impl PropertyStore for TomlStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.props
            .lock()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        let mut props = self.props.lock();
        props.insert(key.to_string(), value.to_string());
        self.persist(&props);
    }
}
