//! # periscope-core
//!
//! Versioned binary-layout resolution for an opaque host process.
//!
//! The host is closed source and reshuffles itself on every release: static
//! offsets move, and the field order of its VM object structs is permuted to
//! resist static reverse-engineering. This crate lets callers address that
//! memory by stable logical names and keeps every per-build number in one
//! place:
//!
//! - Symbol resolution: logical symbol → link-time offset → rebased absolute
//!   address for the current process run
//! - Slot tables: logical struct member → physical slot under the active
//!   build's permutation
//! - Module base lookup against the OS loader
//! - Typed entry points with the unchecked cast confined to one boundary
//! - A diagnostic layout dump for bug reports
//!
//! The active host build is a compile-time choice: exactly one `build-*`
//! feature is enabled and only that build's tables are linked in. Supporting
//! a new host release means writing one table module under `version/`;
//! call sites never change.
//!
//! Everything here is a pure function over immutable, compiled-in tables.
//! Nothing is cached across calls (module bases are per-process-run facts),
//! nothing blocks beyond a single loader lookup, and every operation is safe
//! to call from any number of threads.

pub mod address;
pub mod error;
pub mod field;
pub mod module;
pub mod offset;
pub mod prelude;
pub mod version;
pub mod vm;

pub use address::{Address, FnAddress, ModuleBase};
pub use error::{Error, Result};
pub use field::{FieldTable, SCRAMBLED_SLOTS, SlotEntry, StructAccessor, StructKind, VmMember};
#[cfg(target_os = "windows")]
pub use module::LoaderModules;
pub use module::ModuleBases;
pub use offset::{
    AddressResolver, HostModule, LayoutDump, ModuleDump, OffsetEntry, OffsetTable, Symbol,
    SymbolDump,
};
pub use version::{
    DataOffsets, ModuleNames, NodeOffsets, ScriptOffsets, VersionTables, WorldOffsets,
};
pub use vm::{EntryPoints, ExecuteFn, FetchThreadStateFn, PrintFn, RaiseErrorFn};
