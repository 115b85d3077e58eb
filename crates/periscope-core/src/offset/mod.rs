//! Logical symbols and their per-build link-time offsets.

mod dump;
mod resolver;
mod table;

pub use dump::{LayoutDump, ModuleDump, SymbolDump};
pub use resolver::AddressResolver;
pub use table::{HostModule, OffsetEntry, OffsetTable, Symbol};
