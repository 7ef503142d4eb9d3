//! Entity: per-render instantiation handle for a block
//!
//! The block tree is the immutable template; an entity is the mutable
//! per-render instance the substitution layer configures. Several
//! entities may be created from the same block and never interfere.

use std::collections::HashMap;

use crate::tree::block::Block;

/// A configurable instance of one [`Block`]
#[derive(Debug, Clone)]
pub struct Entity<'a> {
    block: Block<'a>,
    values: HashMap<String, String>,
}

impl<'a> Entity<'a> {
    pub(crate) fn new(block: Block<'a>) -> Self {
        Self {
            block,
            values: HashMap::new(),
        }
    }

    /// The template block this entity renders
    pub fn block(&self) -> Block<'a> {
        self.block
    }

    /// Assign a value for this instance
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up an assigned value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// All values assigned so far
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Drop every assigned value, keeping the block binding
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
