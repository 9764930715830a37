use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use panelizer::io::ext_repr::{ExtPanelCatalog, ExtPlacementDefaults};
use panelizer::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io;

/// Everything a request falls back on: form defaults, the panel stock catalog and drawing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PanelizerPreset {
    #[serde(default)]
    pub defaults: ExtPlacementDefaults,
    #[serde(default)]
    pub catalog: ExtPanelCatalog,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl PanelizerPreset {
    /// Loads the base preset (or the built-in one) and applies the local overrides on top of it.
    pub fn load(base: Option<&Path>, local: Option<&Path>) -> Result<Self> {
        let mut preset = match base {
            Some(path) => io::read_json::<Value>(path)?,
            None => serde_json::to_value(PanelizerPreset::default())?,
        };
        if let Some(path) = local {
            let overrides = io::read_json::<Value>(path)?;
            merge_preset(&mut preset, overrides);
            info!("[CONFIG] applied local preset {}", path.display());
        }
        serde_json::from_value(preset).context("incorrect preset format")
    }
}

/// Overlays `overrides` onto `base`: objects are merged key by key, at any depth,
/// every other value (numbers, strings, arrays) is replaced as a whole.
pub fn merge_preset(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge_preset(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
