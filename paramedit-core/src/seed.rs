use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::model::Model;
use crate::state::{EditorState, IdPolicy, Param, ParamId, ParamRegistry, ParamValue, ValueMap};

/// Embedded default session
const DEFAULT_SEED: &str = include_str!("../default_seed.json");

/// Initial params and model supplied once at session start
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSeed {
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub model: Model,
}

impl SessionSeed {
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(DEFAULT_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SessionSeed = serde_json::from_str(json)?;
        seed.check_ids()?;
        Ok(seed)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    fn check_ids(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for param in &self.params {
            if !seen.insert(param.id) {
                return Err(SeedError::DuplicateId(param.id));
            }
        }
        Ok(())
    }

    /// Build the session state, bringing values into lockstep with params.
    ///
    /// Values keep their seeded order. Values for unknown params and repeated
    /// values for the same param are dropped; params without a value get an
    /// empty one appended.
    pub fn into_state(self, policy: IdPolicy) -> EditorState {
        let SessionSeed { params, model } = self;
        let Model {
            param_values,
            colors,
        } = model;

        let known: HashSet<ParamId> = params.iter().map(|p| p.id).collect();
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(params.len());
        for pv in param_values {
            if !known.contains(&pv.param_id) {
                log::warn!("dropping seeded value for unknown param {}", pv.param_id);
            } else if !seen.insert(pv.param_id) {
                log::warn!("dropping repeated seeded value for param {}", pv.param_id);
            } else {
                entries.push(pv);
            }
        }

        for param in params.iter().filter(|p| !seen.contains(&p.id)) {
            log::warn!("param {} ({}) has no seeded value, starting empty", param.id, param.name);
            entries.push(ParamValue::empty(param.id));
        }

        log::info!("session seeded with {} params", params.len());
        EditorState::from_parts(
            ParamRegistry::with_params(params, policy),
            ValueMap::from_entries(entries),
            colors,
        )
    }
}
