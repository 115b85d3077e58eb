//! Prelude module for convenient imports
//!
//! ```ignore
//! use periscope_core::prelude::*;
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Address primitives
pub use crate::address::{Address, FnAddress, ModuleBase};

// Symbol resolution
pub use crate::offset::{AddressResolver, HostModule, Symbol};

// Scrambled-struct addressing
pub use crate::field::{StructAccessor, StructKind, VmMember};

// Module base lookup
#[cfg(target_os = "windows")]
pub use crate::module::LoaderModules;
pub use crate::module::ModuleBases;

// Build tables and typed entry points
pub use crate::version::VersionTables;
pub use crate::vm::EntryPoints;
