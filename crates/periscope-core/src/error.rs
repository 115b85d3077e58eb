use thiserror::Error;

use crate::field::{StructKind, VmMember};
use crate::offset::Symbol;

/// Errors produced while resolving addresses and field slots.
///
/// All four kinds are locally unrecoverable: the correct address cannot be
/// computed, so the failure is surfaced instead of defaulted. None of these
/// are retried. A missing symbol or member is a table/build mismatch, not a
/// transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The named module is not currently loaded in the host process.
    #[error("module not loaded: {0}")]
    ModuleNotFound(String),

    /// The logical symbol is absent from the active build's offset table.
    #[error("symbol {symbol} not in offset table for {version}")]
    UnknownSymbol {
        symbol: Symbol,
        version: &'static str,
    },

    /// The logical member is absent from the active build's slot table.
    #[error("member {member} not in slot table for {version}")]
    UnknownMember {
        member: VmMember,
        version: &'static str,
    },

    /// A null struct base was supplied to the accessor.
    #[error("null {kind} base while addressing {member}")]
    InvalidBase { kind: StructKind, member: VmMember },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_module() {
        let err = Error::ModuleNotFound("guardlayer64.dll".to_string());
        assert_eq!(err.to_string(), "module not loaded: guardlayer64.dll");
    }

    #[test]
    fn test_error_display_names_symbol_and_version() {
        let err = Error::UnknownSymbol {
            symbol: Symbol::Execute,
            version: "version-test",
        };
        assert_eq!(
            err.to_string(),
            "symbol vm.execute not in offset table for version-test"
        );
    }

    #[test]
    fn test_invalid_base_display() {
        let err = Error::InvalidBase {
            kind: StructKind::Closure,
            member: VmMember::ClosureDebugName,
        };
        assert_eq!(
            err.to_string(),
            "null closure base while addressing closure.debug_name"
        );
    }
}
