//! Realm configuration.

/// Name of the member run on every newly constructed instance.
pub const DEFAULT_INITIALIZER: &str = "init";

/// Name of the instance slot holding the parent implementation during an override.
pub const DEFAULT_SUPER_SLOT: &str = "sup";

pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Configuration for a realm.
#[derive(Debug, Clone, PartialEq)]
pub struct RealmConfig {
    /// Member looked up on the prototype chain and run by `construct`.
    pub initializer: String,
    /// Instance slot an override reads its parent implementation from.
    pub super_slot: String,
    /// Maximum number of nested function bodies. Bound and override trampolines are not
    /// counted. None means unlimited.
    pub max_call_depth: Option<usize>,
}

impl RealmConfig {
    pub fn new() -> Self {
        RealmConfig {
            initializer: DEFAULT_INITIALIZER.to_string(),
            super_slot: DEFAULT_SUPER_SLOT.to_string(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    pub fn with_initializer(mut self, name: impl Into<String>) -> Self {
        self.initializer = name.into();
        self
    }

    pub fn with_super_slot(mut self, name: impl Into<String>) -> Self {
        self.super_slot = name.into();
        self
    }

    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Removes the call depth limit. Deep recursion then ends in a native stack overflow.
    pub fn with_unlimited_call_depth(mut self) -> Self {
        self.max_call_depth = None;
        self
    }
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self::new()
    }
}
