use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label name to zero-based instruction index. A label binds to the next
/// instruction line after it; label lines consume no index of their own.
///
/// Populated during pass 1 only, read-only during resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelTable {
    map: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` at `index`. First declaration wins; re-declaring an
    /// existing name is silently ignored.
    pub fn declare(&mut self, name: &str, index: usize) {
        self.map.entry(name.to_string()).or_insert(index);
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
