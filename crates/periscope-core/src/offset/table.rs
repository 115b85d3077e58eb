//! The per-build offset table.
//!
//! Every magic number lives in one `version/build_*` module per host release
//! instead of at call sites. A host update is a one-table diff; callers only
//! ever speak [`Symbol`].

use strum::{Display, EnumIter};

use crate::error::{Error, Result};

/// Host modules that carry rebased symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum HostModule {
    /// The host executable itself.
    #[strum(serialize = "client")]
    Client,
    /// The anti-tamper layer shipped alongside the client.
    #[strum(serialize = "guard")]
    Guard,
}

/// Stable logical names for host addresses.
///
/// The dotted display names group symbols by area (`process.*` for host entry
/// points, `vm.*` for interpreter internals, `guard.*` for the anti-tamper
/// module). The grouping is organizational only; nothing dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Symbol {
    /// Host logging entry point.
    #[strum(serialize = "process.print")]
    Print,
    /// Raises an error on a VM thread, never returns to the caller.
    #[strum(serialize = "process.raise_error")]
    RaiseError,
    /// Decrypts and returns the host's live VM thread state.
    #[strum(serialize = "process.fetch_thread_state")]
    FetchThreadState,
    /// Root of the host's object tree.
    #[strum(serialize = "process.world_root")]
    WorldRoot,

    /// The interpreter's shared nil sentinel object.
    #[strum(serialize = "vm.nil_object")]
    NilObject,
    /// Bytecode dispatch loop.
    #[strum(serialize = "vm.execute")]
    Execute,
    /// Shared empty-table node sentinel.
    #[strum(serialize = "vm.dummy_node")]
    DummyNode,
    /// Opcode handler table.
    #[strum(serialize = "vm.opcode_table")]
    OpcodeTable,

    /// Page-state bitmap inside the anti-tamper module.
    #[strum(serialize = "guard.page_bitmap")]
    GuardPageBitmap,
}

/// One row of an offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetEntry {
    pub symbol: Symbol,
    /// Module whose runtime base the offset is rebased against.
    pub module: HostModule,
    /// Link-time offset from that module's base.
    pub offset: u64,
}

/// Immutable symbol-to-offset mapping for one host build.
///
/// Tables are compiled-in constants; there is no on-disk representation and
/// nothing mutates a table after construction.
#[derive(Debug, Clone, Copy)]
pub struct OffsetTable {
    /// Host build id these offsets were taken from.
    pub version: &'static str,
    pub entries: &'static [OffsetEntry],
}

impl OffsetTable {
    /// Look up the offset entry for `symbol`.
    pub fn lookup(&self, symbol: Symbol) -> Result<&OffsetEntry> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .ok_or(Error::UnknownSymbol {
                symbol,
                version: self.version,
            })
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.iter().any(|entry| entry.symbol == symbol)
    }

    /// Symbols present in this build's table.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|entry| entry.symbol)
    }
}
