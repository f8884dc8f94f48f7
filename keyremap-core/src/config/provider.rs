use std::fs::read_to_string;
use std::path::PathBuf;

use log::{info, warn};

use super::{LoadedMapping, MappingLoader};
use crate::error::Result;

/// A source the engine can take its mapping table from
pub trait MappingProvider {
    /// Human readable description, used in logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<LoadedMapping>;
}

/// Mapping stored in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MappingProvider for FileProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<LoadedMapping> {
        let json = read_to_string(&self.path)?;
        MappingLoader::load_str(&json)
    }
}

/// Mapping held in memory, e.g. the bundled default
#[derive(Debug, Clone)]
pub struct StaticProvider {
    name: String,
    json: String,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }

    pub fn bundled() -> Self {
        Self::new("bundled default", super::BUNDLED_MAPPING)
    }
}

impl MappingProvider for StaticProvider {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<LoadedMapping> {
        MappingLoader::load_str(&self.json)
    }
}

/// Try each provider in order and return the first that loads.
///
/// When every provider fails the result is an empty mapping, which makes the
/// engine a pure passthrough on every layer.
pub fn load_first_available(providers: &[&dyn MappingProvider]) -> LoadedMapping {
    for provider in providers {
        match provider.load() {
            Ok(loaded) => {
                info!(
                    "Loaded mapping from {}: {} entries, {} skipped",
                    provider.describe(),
                    loaded.table.len(),
                    loaded.issues.len()
                );
                return loaded;
            }
            Err(e) => warn!("Could not load mapping from {}: {}", provider.describe(), e),
        }
    }

    warn!("No mapping source available, running with empty layers");
    LoadedMapping::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, KeyCode, Layer};

    #[test]
    fn test_falls_through_to_next_provider() {
        let missing = FileProvider::new("/nonexistent/keyremap/mapping.json");
        let broken = StaticProvider::new("broken", "{ not json");
        let good = StaticProvider::new("good", r#"{"M1": {"A": {"type": "KEYCODE", "key": "B"}}}"#);

        let loaded = load_first_available(&[&missing, &broken, &good]);
        assert_eq!(loaded.table.get(Layer::M1, KeyCode::A), Some(&Action::key(KeyCode::B)));
    }

    #[test]
    fn test_no_provider_gives_empty_table() {
        let broken = StaticProvider::new("broken", "42");
        let loaded = load_first_available(&[&broken]);
        assert!(loaded.table.is_empty());

        assert!(load_first_available(&[]).table.is_empty());
    }

    #[test]
    fn test_bundled_mapping_is_clean() {
        let loaded = StaticProvider::bundled().load().unwrap();
        assert!(loaded.issues.is_empty(), "{:?}", loaded.issues);
        assert!(loaded.table.layer_len(Layer::M3) > 0);
    }
}
