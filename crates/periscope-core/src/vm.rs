//! Typed entry points into the host process.
//!
//! The signature aliases mirror what the host actually implements at each
//! symbol; they are asserted by the table, not checked against the binary.
//! Entry points are resolved once, at startup, into an immutable
//! [`EntryPoints`] value. Nothing is reassigned afterward; there is no
//! process-wide mutable pointer.

use std::ffi::{c_char, c_void};

use crate::address::FnAddress;
use crate::error::Result;
use crate::module::ModuleBases;
use crate::offset::{AddressResolver, Symbol};

/// Host logging entry point: `(channel, message) -> written`.
pub type PrintFn = unsafe extern "C" fn(u64, *const c_char) -> i32;

/// Raises an error on the given VM thread; unwinds instead of returning.
pub type RaiseErrorFn = unsafe extern "C" fn(*mut c_void, i32);

/// Decrypts the host's VM thread state: `(context, key_out, state_out)`.
pub type FetchThreadStateFn = unsafe extern "C" fn(u64, *mut u64, *mut u64) -> u64;

/// Bytecode dispatch loop over a VM thread.
pub type ExecuteFn = unsafe extern "C" fn(*mut c_void);

/// Host entry points, resolved once and bound for the life of the process.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoints {
    pub print: FnAddress<PrintFn>,
    pub raise_error: FnAddress<RaiseErrorFn>,
    pub fetch_thread_state: FnAddress<FetchThreadStateFn>,
    pub execute: FnAddress<ExecuteFn>,
}

impl EntryPoints {
    /// Resolve every entry point against `resolver`'s build tables.
    ///
    /// Fails on the first symbol whose module is not loaded or which is
    /// missing from the active table; no partially-bound set is handed out.
    pub fn resolve<M: ModuleBases>(resolver: &AddressResolver<'_, M>) -> Result<Self> {
        Ok(Self {
            print: resolver.resolve_fn(Symbol::Print)?,
            raise_error: resolver.resolve_fn(Symbol::RaiseError)?,
            fetch_thread_state: resolver.resolve_fn(Symbol::FetchThreadState)?,
            execute: resolver.resolve_fn(Symbol::Execute)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::error::Error;
    use crate::module::MockModules;
    use crate::version::VersionTables;

    #[test]
    fn test_entry_points_bind_against_the_active_build() {
        let modules = MockModules::with_executable_base(0x7ff6_4000_0000);
        let resolver = AddressResolver::for_active_build(&modules);
        let entries = EntryPoints::resolve(&resolver).unwrap();

        let tables = VersionTables::active();
        let expect = |symbol| {
            Address(0x7ff6_4000_0000 + tables.offsets.lookup(symbol).unwrap().offset)
        };
        assert_eq!(entries.print.address(), expect(Symbol::Print));
        assert_eq!(entries.raise_error.address(), expect(Symbol::RaiseError));
        assert_eq!(
            entries.fetch_thread_state.address(),
            expect(Symbol::FetchThreadState)
        );
        assert_eq!(entries.execute.address(), expect(Symbol::Execute));
    }

    #[test]
    fn test_entry_points_fail_without_the_host_module() {
        let modules = MockModules::new();
        let resolver = AddressResolver::for_active_build(&modules);
        let err = EntryPoints::resolve(&resolver).unwrap_err();
        assert_eq!(err, Error::ModuleNotFound("<executable>".to_string()));
    }
}
