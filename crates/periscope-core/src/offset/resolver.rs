//! Absolute-address resolution.
//!
//! Composes the offset table with a [`ModuleBases`] source:
//! `base(module) + offset`. Nothing is cached across calls; a module base is
//! a per-process-run fact, and a resolved address is only held for the single
//! operation it was resolved for.

use tracing::trace;

use crate::address::{Address, FnAddress, ModuleBase};
use crate::error::Result;
use crate::module::ModuleBases;
use crate::offset::{HostModule, Symbol};
use crate::version::VersionTables;

/// Resolves logical symbols to absolute addresses for the current process
/// run.
///
/// Pure composition: errors from the offset table and the module source
/// propagate unchanged, and no new error kinds are introduced here.
#[derive(Debug, Clone, Copy)]
pub struct AddressResolver<'a, M: ModuleBases> {
    tables: &'a VersionTables,
    modules: &'a M,
}

impl<'a, M: ModuleBases> AddressResolver<'a, M> {
    pub fn new(tables: &'a VersionTables, modules: &'a M) -> Self {
        Self { tables, modules }
    }

    /// Resolver over the build selected at compile time.
    pub fn for_active_build(modules: &'a M) -> Self {
        Self::new(VersionTables::active(), modules)
    }

    /// Resolve `symbol` to its absolute address.
    ///
    /// The table lookup runs first: an unknown symbol never reaches the OS
    /// loader.
    pub fn resolve(&self, symbol: Symbol) -> Result<Address> {
        let entry = self.tables.offsets.lookup(symbol)?;
        let base = self
            .modules
            .base_of(self.tables.module_file(entry.module))?;
        let address = base.rebase(entry.offset);
        trace!(
            %symbol,
            %base,
            offset = format_args!("{:#x}", entry.offset),
            %address,
            "resolved symbol"
        );
        Ok(address)
    }

    /// Resolve `symbol` and tag the result with the signature `F`.
    ///
    /// The tag is caller-specified and unvalidated; the actual cast is
    /// deferred to [`FnAddress::callable`].
    pub fn resolve_fn<F: Copy>(&self, symbol: Symbol) -> Result<FnAddress<F>> {
        Ok(FnAddress::new(self.resolve(symbol)?))
    }

    /// Runtime base of `module` under this resolver's tables.
    pub fn module_base(&self, module: HostModule) -> Result<ModuleBase> {
        self.modules.base_of(self.tables.module_file(module))
    }

    pub fn tables(&self) -> &'a VersionTables {
        self.tables
    }
}
