//! Bidirectional label <-> id interning.

use crate::VertexId;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Maps arbitrary string labels to dense ids and back.
///
/// The forward map and the inverse vector are only ever written together, so every id the
/// table hands out resolves to exactly one label.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    ids: HashMap<String, VertexId>,
    labels: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Returns the id for `label`, allocating the next sequential id on first sight.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    /// Looks up the label for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never handed out by [`SymbolTable::intern`].
    pub fn resolve(&self, id: VertexId) -> &str {
        match self.labels.get(id) {
            Some(label) => label.as_str(),
            None => panic!(
                "vertex id {id} is not interned (table holds {} labels)",
                self.labels.len()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| (id, label.as_str()))
    }
}
