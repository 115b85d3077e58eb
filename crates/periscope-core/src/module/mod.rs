//! Runtime module-base lookup.
//!
//! Bases come from OS loader state and are only valid for the current process
//! run; nothing here caches, every resolution asks again. The lookup is a
//! single loader call.

#[cfg(target_os = "windows")]
mod loader;
#[cfg(test)]
pub mod mock;

#[cfg(target_os = "windows")]
pub use loader::LoaderModules;
#[cfg(test)]
pub use mock::MockModules;

use crate::address::ModuleBase;
use crate::error::Result;

/// Source of runtime module base addresses.
///
/// `None` names the host executable itself; `Some(file)` names a dependent
/// library by its loader file name. Implementations fail with
/// [`Error::ModuleNotFound`](crate::Error::ModuleNotFound) when the module is
/// not (yet) loaded; there is no sentinel address.
pub trait ModuleBases {
    fn base_of(&self, name: Option<&str>) -> Result<ModuleBase>;
}

/// Loader-facing display name for an optional module file name.
pub(crate) fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("<executable>")
}
