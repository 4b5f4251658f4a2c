use serde::{Deserialize, Serialize};

use super::param::{Param, ParamId};

/// How `ParamRegistry::add` picks the id of a new param
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Counter seeded past the highest id ever seen. Ids are not reused
    /// until the counter is exhausted, then the lowest free positive id is taken.
    #[default]
    Monotonic,
    /// `len + 1`. Reuses ids after a delete and can collide with a live one.
    CountPlusOne,
}

/// Ordered param definitions
#[derive(Debug, Clone, Default)]
pub struct ParamRegistry {
    params: Vec<Param>,
    next_id: ParamId,
    policy: IdPolicy,
}

impl ParamRegistry {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            params: Vec::new(),
            next_id: 1,
            policy,
        }
    }

    /// Build from already validated params, keeping their order
    pub fn with_params(params: Vec<Param>, policy: IdPolicy) -> Self {
        let next_id = params
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max.saturating_add(1).max(1));
        Self {
            params,
            next_id,
            policy,
        }
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains(&self, id: ParamId) -> bool {
        self.params.iter().any(|p| p.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        self.params.iter().map(|p| p.id)
    }

    /// Append a param and return a copy of it.
    ///
    /// The name is stored as given. Callers gate on a non-blank name.
    pub fn add(&mut self, name: &str) -> Param {
        let id = self.allocate_id();
        let param = Param::new(id, name);
        self.params.push(param.clone());
        param
    }

    /// Remove every param with this id. Returns false if none matched.
    pub fn remove(&mut self, id: ParamId) -> bool {
        let before = self.params.len();
        self.params.retain(|p| p.id != id);
        self.params.len() != before
    }

    fn allocate_id(&mut self) -> ParamId {
        match self.policy {
            IdPolicy::Monotonic => {
                let id = self.next_id;
                match id.checked_add(1) {
                    Some(next) => {
                        self.next_id = next;
                        id
                    }
                    // the last id is handed out once; after that, scan for a gap
                    None if !self.contains(id) => id,
                    None => self.lowest_free_id(),
                }
            }
            IdPolicy::CountPlusOne => ParamId::try_from(self.params.len())
                .unwrap_or(ParamId::MAX)
                .saturating_add(1),
        }
    }

    fn lowest_free_id(&self) -> ParamId {
        (1..=ParamId::MAX)
            .find(|id| !self.contains(*id))
            .unwrap_or(ParamId::MAX)
    }
}
