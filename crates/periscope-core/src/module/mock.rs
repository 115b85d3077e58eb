//! Mock module source for tests.

use std::cell::Cell;
use std::collections::HashMap;

use super::{ModuleBases, display_name};
use crate::address::ModuleBase;
use crate::error::{Error, Result};

/// In-memory [`ModuleBases`] with a lookup counter.
///
/// The counter lets tests assert not just what resolves, but that certain
/// paths never reach the loader at all.
#[derive(Debug, Default)]
pub struct MockModules {
    bases: HashMap<Option<String>, u64>,
    lookups: Cell<usize>,
}

impl MockModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock with only the host executable mapped, at `base`.
    pub fn with_executable_base(base: u64) -> Self {
        let mut modules = Self::new();
        modules.insert(None, base);
        modules
    }

    /// Map a module (`None` = the executable) to a base address.
    pub fn insert(&mut self, name: Option<&str>, base: u64) {
        self.bases.insert(name.map(str::to_string), base);
    }

    /// Number of `base_of` calls made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ModuleBases for MockModules {
    fn base_of(&self, name: Option<&str>) -> Result<ModuleBase> {
        self.lookups.set(self.lookups.get() + 1);
        self.bases
            .get(&name.map(str::to_string))
            .copied()
            .map(ModuleBase)
            .ok_or_else(|| Error::ModuleNotFound(display_name(name).to_string()))
    }
}
