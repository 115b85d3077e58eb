//! Field addressing over scrambled structs.

use tracing::trace;

use crate::address::Address;
use crate::error::{Error, Result};
use crate::field::{FieldTable, VmMember};
use crate::version::VersionTables;

/// Computes member addresses inside the host's scrambled VM structs.
///
/// Address-only: the accessor can check that a supplied base is non-null, but
/// not that it actually points at an instance of the member's struct kind,
/// because the host exposes no such information. Interpreting the bytes at
/// the returned address belongs to the caller.
#[derive(Debug, Clone, Copy)]
pub struct StructAccessor<'a> {
    fields: &'a FieldTable,
}

impl<'a> StructAccessor<'a> {
    pub fn new(fields: &'a FieldTable) -> Self {
        Self { fields }
    }

    /// Accessor over the build selected at compile time.
    pub fn for_active_build() -> Self {
        Self::new(&VersionTables::active().fields)
    }

    /// Address of `member` inside the struct at `base`.
    ///
    /// The base check runs before the slot lookup: a null base never reaches
    /// the table.
    pub fn field_address(&self, base: Address, member: VmMember) -> Result<Address> {
        if base.is_null() {
            return Err(Error::InvalidBase {
                kind: member.kind(),
                member,
            });
        }
        let slot = self.fields.slot_of(member)?;
        let address = base.offset_by(u64::from(slot) * member.kind().slot_size());
        trace!(%member, slot, %base, %address, "resolved field");
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{SlotEntry, StructKind};

    const TABLE: FieldTable = FieldTable {
        version: "version-test",
        entries: &[
            SlotEntry {
                member: VmMember::ClosureDebugName,
                slot: 3,
            },
            SlotEntry {
                member: VmMember::ClosureFunction,
                slot: 0,
            },
        ],
    };

    #[test]
    fn test_field_address_is_additive() {
        let accessor = StructAccessor::new(&TABLE);
        let address = accessor
            .field_address(Address(0x2000), VmMember::ClosureDebugName)
            .unwrap();
        assert_eq!(address, Address(0x2018));
    }

    #[test]
    fn test_field_address_is_deterministic() {
        let accessor = StructAccessor::new(&TABLE);
        let first = accessor.field_address(Address(0x2000), VmMember::ClosureDebugName);
        for _ in 0..16 {
            assert_eq!(
                accessor.field_address(Address(0x2000), VmMember::ClosureDebugName),
                first
            );
        }
    }

    #[test]
    fn test_null_base_wins_over_missing_member() {
        // ThreadTop is absent from TABLE; the base check must fire first.
        let accessor = StructAccessor::new(&TABLE);
        let err = accessor
            .field_address(Address::NULL, VmMember::ThreadTop)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBase {
                kind: StructKind::Thread,
                member: VmMember::ThreadTop,
            }
        );
    }

    #[test]
    fn test_missing_member_with_live_base_is_unknown_member() {
        let accessor = StructAccessor::new(&TABLE);
        let err = accessor
            .field_address(Address(0x2000), VmMember::ThreadTop)
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownMember {
                member: VmMember::ThreadTop,
                version: "version-test",
            }
        );
    }

    #[test]
    fn test_active_build_accessor_matches_its_table() {
        let accessor = StructAccessor::for_active_build();
        let table = &crate::version::VersionTables::active().fields;
        let slot = table.slot_of(VmMember::ProtoConstants).unwrap();

        let address = accessor
            .field_address(Address(0x4000), VmMember::ProtoConstants)
            .unwrap();
        assert_eq!(address, Address(0x4000 + u64::from(slot) * 8));
    }

    #[test]
    fn test_swapping_builds_moves_the_member_not_the_call_site() {
        const OLD: FieldTable = FieldTable {
            version: "version-old",
            entries: &[SlotEntry {
                member: VmMember::ClosureDebugName,
                slot: 4,
            }],
        };
        const NEW: FieldTable = FieldTable {
            version: "version-new",
            entries: &[SlotEntry {
                member: VmMember::ClosureDebugName,
                slot: 2,
            }],
        };

        let debug_name_of = |table: &'static FieldTable| {
            StructAccessor::new(table)
                .field_address(Address(0x2000), VmMember::ClosureDebugName)
                .unwrap()
        };

        assert_eq!(debug_name_of(&OLD), Address(0x2000 + 4 * 8));
        assert_eq!(debug_name_of(&NEW), Address(0x2000 + 2 * 8));
    }
}
