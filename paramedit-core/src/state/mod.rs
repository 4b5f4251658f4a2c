pub mod forms;
pub mod param;
pub mod registry;
pub mod values;

pub use forms::{AddForm, RenderTrigger};
pub use param::{Param, ParamId, ParamKind, ParamValue};
pub use registry::{IdPolicy, ParamRegistry};
pub use values::ValueMap;

use serde_json::Value;

use crate::error::RenderError;
use crate::model;

/// Session state, owned by main.rs and passed to panes and dispatch by reference.
///
/// The registry and the value map are only ever mutated together, so the set
/// of value ids always equals the set of param ids.
#[derive(Debug, Clone)]
pub struct EditorState {
    registry: ParamRegistry,
    values: ValueMap,
    colors: Vec<Value>,
    /// Text shown in the output panel
    pub output: String,
    render_trigger: RenderTrigger,
}

impl EditorState {
    pub fn new(policy: IdPolicy) -> Self {
        Self::from_parts(ParamRegistry::new(policy), ValueMap::new(), Vec::new())
    }

    /// Caller guarantees the registry and values already agree on ids
    pub(crate) fn from_parts(registry: ParamRegistry, values: ValueMap, colors: Vec<Value>) -> Self {
        let render_trigger = RenderTrigger::from_filled(values.all_filled());
        Self {
            registry,
            values,
            colors,
            output: String::new(),
            render_trigger,
        }
    }

    pub fn params(&self) -> &[Param] {
        self.registry.params()
    }

    pub fn registry(&self) -> &ParamRegistry {
        &self.registry
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn value(&self, id: ParamId) -> &str {
        self.values.get(id).unwrap_or("")
    }

    pub fn colors(&self) -> &[Value] {
        &self.colors
    }

    /// Cached trigger state, refreshed after every mutation
    pub fn render_trigger(&self) -> RenderTrigger {
        self.render_trigger
    }

    pub fn all_filled(&self) -> bool {
        self.values.all_filled()
    }

    pub fn add_param(&mut self, name: &str) -> Param {
        let param = self.registry.add(name);
        self.values.push_empty(param.id);
        self.refresh_trigger();
        param
    }

    pub fn remove_param(&mut self, id: ParamId) -> bool {
        let removed = self.registry.remove(id);
        self.values.remove(id);
        self.refresh_trigger();
        removed
    }

    pub fn set_value(&mut self, id: ParamId, value: &str) -> bool {
        let found = self.values.set_value(id, value);
        self.refresh_trigger();
        found
    }

    /// Authoritative render over the current snapshot
    pub fn render(&self) -> Result<String, RenderError> {
        model::render(self.values.entries(), &self.colors)
    }

    fn refresh_trigger(&mut self) {
        self.render_trigger = RenderTrigger::from_filled(self.values.all_filled());
    }
}
