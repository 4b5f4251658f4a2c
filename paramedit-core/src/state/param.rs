use serde::{Deserialize, Serialize};

pub type ParamId = i64;

/// Value type tag. Only text parameters exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ParamKind,
}

impl Param {
    pub fn new(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ParamKind::String,
        }
    }
}

/// Current text bound to a param
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: ParamId, value: impl Into<String>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }

    pub fn empty(param_id: ParamId) -> Self {
        Self::new(param_id, String::new())
    }

    /// Blank means empty after trimming surrounding whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
