//! Address arithmetic primitives.
//!
//! Everything in this crate ultimately produces an [`Address`]: a raw
//! position in the host process, computed on demand and never cached. Code
//! addresses additionally carry their expected signature as a type parameter
//! ([`FnAddress`]), and the integer-to-function-pointer cast is confined to
//! a single method.

use std::fmt;
use std::marker::PhantomData;

/// Runtime load address the OS loader assigned to a module for the current
/// process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleBase(pub u64);

impl ModuleBase {
    /// Rebase a link-time offset against this module's runtime base.
    pub fn rebase(self, offset: u64) -> Address {
        Address(self.0 + offset)
    }
}

impl fmt::Display for ModuleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// An absolute address in the host process.
///
/// This is a number, not a pointer: the crate computes where things live but
/// never dereferences host memory itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u64);

impl Address {
    pub const NULL: Address = Address(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// This address advanced by `bytes`.
    pub fn offset_by(self, bytes: u64) -> Address {
        Address(self.0 + bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A resolved code address tagged with the signature the host is expected to
/// implement at that location.
///
/// The tag is advisory: nothing validates that the host code actually matches
/// `F`. The cast from integer to function pointer happens in
/// [`FnAddress::callable`] and nowhere else.
#[derive(Debug, Clone, Copy)]
pub struct FnAddress<F> {
    address: Address,
    _signature: PhantomData<F>,
}

impl<F: Copy> FnAddress<F> {
    pub(crate) fn new(address: Address) -> Self {
        Self {
            address,
            _signature: PhantomData,
        }
    }

    /// The untyped address this wrapper was built from.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Cast the address to its declared signature.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the active build's offset table is
    /// correct for the running host, i.e. that this address points at code
    /// implementing `F`. A stale table makes the returned function pointer
    /// wild.
    pub unsafe fn callable(&self) -> F {
        debug_assert_eq!(size_of::<F>(), size_of::<u64>());
        // SAFETY: `F` is a pointer-sized function pointer type per the
        // debug_assert above; the caller vouches for what the address holds.
        unsafe { std::mem::transmute_copy(&self.address.0) }
    }
}
