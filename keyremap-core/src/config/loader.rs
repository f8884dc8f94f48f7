use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::ConfigError;
use crate::error::Result;
use crate::types::{Action, KeyCode, Layer, MappingTable, ModifierMask, Step};

/// Action descriptor as written in a mapping file
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
enum ActionDescriptor {
    Keycode {
        key: String,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    Text {
        text: String,
    },
    Sequence {
        steps: Vec<StepDescriptor>,
    },
}

/// Unknown fields are ignored, as in `ActionDescriptor`
#[derive(Debug, Deserialize)]
struct StepDescriptor {
    key: String,
    #[serde(default)]
    modifiers: Vec<String>,
}

/// A parsed mapping together with the entries that had to be skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedMapping {
    pub table: MappingTable,
    pub issues: Vec<ConfigError>,
}

pub struct MappingLoader;

impl MappingLoader {
    /// Parse a JSON mapping document.
    ///
    /// Fails only when the document itself is not a JSON object. Every bad
    /// layer or entry inside it is skipped and reported in `issues`.
    pub fn load_str(json: &str) -> Result<LoadedMapping> {
        let root: Map<String, Value> = serde_json::from_str(json)?;
        let mut loaded = LoadedMapping::default();

        for (layer_id, entries) in root {
            let Some(layer) = Layer::from_id(&layer_id) else {
                Self::skip(&mut loaded, ConfigError::UnknownLayer(layer_id));
                continue;
            };
            let Value::Object(entries) = entries else {
                Self::skip(&mut loaded, ConfigError::LayerNotObject(layer_id));
                continue;
            };

            for (key_name, descriptor) in entries {
                match Self::parse_entry(&layer_id, &key_name, descriptor) {
                    Ok((key, action)) => {
                        debug!("{}: {} => {}", layer, key, action);
                        loaded.table.insert(layer, key, action);
                    }
                    Err(issue) => Self::skip(&mut loaded, issue),
                }
            }
        }

        Ok(loaded)
    }

    fn skip(loaded: &mut LoadedMapping, issue: ConfigError) {
        warn!("Skipping mapping entry: {}", issue);
        loaded.issues.push(issue);
    }

    fn parse_entry(
        layer: &str,
        key_name: &str,
        descriptor: Value,
    ) -> std::result::Result<(KeyCode, Action), ConfigError> {
        let key = Self::resolve_key(layer, key_name)?;

        let descriptor: ActionDescriptor =
            serde_json::from_value(descriptor).map_err(|e| ConfigError::Malformed {
                layer: layer.to_string(),
                key: key_name.to_string(),
                message: e.to_string(),
            })?;

        let action = match descriptor {
            ActionDescriptor::Keycode { key: target, modifiers } => Action::KeyCode {
                target: Self::resolve_key(layer, &target)?,
                modifiers: Self::resolve_modifiers(layer, key_name, &modifiers)?,
            },
            ActionDescriptor::Text { text } => Action::Text(text),
            ActionDescriptor::Sequence { steps } => {
                if steps.is_empty() {
                    return Err(ConfigError::EmptySequence {
                        layer: layer.to_string(),
                        key: key_name.to_string(),
                    });
                }
                let steps = steps
                    .iter()
                    .map(|step| {
                        Ok(Step::new(
                            Self::resolve_key(layer, &step.key)?,
                            Self::resolve_modifiers(layer, key_name, &step.modifiers)?,
                        ))
                    })
                    .collect::<std::result::Result<Vec<_>, ConfigError>>()?;
                Action::Sequence(steps)
            }
        };

        Ok((key, action))
    }

    fn resolve_key(layer: &str, name: &str) -> std::result::Result<KeyCode, ConfigError> {
        KeyCode::from_name(name).ok_or_else(|| ConfigError::UnknownKey {
            layer: layer.to_string(),
            name: name.to_string(),
        })
    }

    fn resolve_modifiers(
        layer: &str,
        key: &str,
        names: &[String],
    ) -> std::result::Result<ModifierMask, ConfigError> {
        names.iter().try_fold(ModifierMask::empty(), |mask, name| {
            ModifierMask::from_config_name(name)
                .map(|m| mask | m)
                .ok_or_else(|| ConfigError::UnknownModifier {
                    layer: layer.to_string(),
                    key: key.to_string(),
                    name: name.clone(),
                })
        })
    }
}
