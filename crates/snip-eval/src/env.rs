//! Flat variable context for one run.

use snip_types::Value;
use std::collections::BTreeMap;

/// Identifier → scalar mapping built fresh for every run.
///
/// There is a single scope. Defining a name twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableContext {
    bindings: BTreeMap<String, Value>,
}

impl VariableContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
