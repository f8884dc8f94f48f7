use thiserror::Error;

/// Problems with a single mapping entry. Never fatal: the entry is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown layer id: {0}")]
    UnknownLayer(String),

    #[error("{layer}: unknown key name: {name}")]
    UnknownKey { layer: String, name: String },

    #[error("{layer}/{key}: unknown modifier: {name}")]
    UnknownModifier { layer: String, key: String, name: String },

    #[error("{layer}/{key}: malformed action: {message}")]
    Malformed { layer: String, key: String, message: String },

    #[error("{layer}/{key}: sequence has no steps")]
    EmptySequence { layer: String, key: String },

    #[error("Layer {0} is not an object")]
    LayerNotObject(String),
}
