//! Mapping configuration: JSON loading and source fallback

mod error;
mod loader;
mod provider;

pub use error::ConfigError;
pub use loader::{LoadedMapping, MappingLoader};
pub use provider::{load_first_available, FileProvider, MappingProvider, StaticProvider};

/// Mapping shipped with the crate, used when no user mapping can be loaded
pub const BUNDLED_MAPPING: &str = include_str!("../../assets/default_mapping.json");
