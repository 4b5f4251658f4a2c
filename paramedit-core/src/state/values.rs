use super::param::{ParamId, ParamValue};

/// Live values, one per registered param, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    entries: Vec<ParamValue>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ParamValue>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ParamValue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, param_id: ParamId) -> Option<&str> {
        self.entries
            .iter()
            .find(|pv| pv.param_id == param_id)
            .map(|pv| pv.value.as_str())
    }

    pub fn param_ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        self.entries.iter().map(|pv| pv.param_id)
    }

    pub(crate) fn push_empty(&mut self, param_id: ParamId) {
        self.entries.push(ParamValue::empty(param_id));
    }

    pub(crate) fn remove(&mut self, param_id: ParamId) {
        self.entries.retain(|pv| pv.param_id != param_id);
    }

    /// Store `value` untouched. Returns false when no entry has this id.
    pub fn set_value(&mut self, param_id: ParamId, value: &str) -> bool {
        let mut found = false;
        for pv in self.entries.iter_mut().filter(|pv| pv.param_id == param_id) {
            pv.value = value.to_string();
            found = true;
        }
        found
    }

    /// True when no value is blank. Vacuously true for an empty map.
    pub fn all_filled(&self) -> bool {
        self.entries.iter().all(|pv| !pv.is_blank())
    }
}
