use std::collections::HashMap;

use crate::entity::Record;

/// Records keyed by id, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record and return a copy of it.
    pub fn insert(&mut self, record: T) -> T {
        let id = record.id().to_string();
        if self.records.insert(id.clone(), record.clone()).is_none() {
            self.order.push(id);
        }
        record
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.records.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Clone every record matching `pred`, in insertion order.
    pub fn filtered<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|r| pred(r)).cloned().collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
