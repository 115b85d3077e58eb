//! Per-build layout tables and compile-time build selection.
//!
//! One sub-module per supported host build; each holds that build's offset
//! table, slot permutations, module file names, and struct-relative data
//! offsets. Exactly one `build-*` cargo feature selects which tables are
//! active. The choice is made at compile time and never branched on at
//! runtime, which leaves a mid-run table swap unrepresentable. Supporting a
//! new host release means adding one module here and one feature line in
//! Cargo.toml.

mod build_4c1f0b;
mod build_b6e93d;

use crate::field::FieldTable;
use crate::offset::{HostModule, OffsetTable};

/// Loader file names of the host modules, per build.
///
/// The client is addressed as the process executable and needs no file name;
/// the guard module ships as a DLL whose name the host may rotate between
/// builds.
#[derive(Debug, Clone, Copy)]
pub struct ModuleNames {
    pub guard: &'static str,
}

/// Offsets into the host's world (object-tree) bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct WorldOffsets {
    /// From the rebased `process.world_root` placeholder to the real world.
    pub placeholder_to_world: u64,
    /// From the world to its script execution context.
    pub script_context: u64,
    /// From the world to the world-loaded flag.
    pub world_loaded: u64,
}

/// Offsets from a script object to its bytecode source.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOffsets {
    pub client_source: u64,
    pub shared_source: u64,
}

/// Offsets from any tree node to its common header fields.
#[derive(Debug, Clone, Copy)]
pub struct NodeOffsets {
    pub name: u64,
    pub children: u64,
}

/// Struct-relative offsets into unscrambled host objects.
///
/// Unlike the slot tables these are byte offsets, not slot indices: the host
/// does not permute these structs, it just moves the fields between builds.
/// Added to a caller-supplied object address via
/// [`Address::offset_by`](crate::Address::offset_by).
#[derive(Debug, Clone, Copy)]
pub struct DataOffsets {
    pub world: WorldOffsets,
    pub script: ScriptOffsets,
    pub node: NodeOffsets,
}

impl DataOffsets {
    /// True when no field was left zeroed while filling in a new build's
    /// table.
    pub fn is_complete(&self) -> bool {
        self.world.placeholder_to_world != 0
            && self.world.script_context != 0
            && self.world.world_loaded != 0
            && self.script.client_source != 0
            && self.script.shared_source != 0
            && self.node.name != 0
            && self.node.children != 0
    }
}

/// The complete layout description of one host build.
#[derive(Debug, Clone, Copy)]
pub struct VersionTables {
    /// Host build id, e.g. `version-b6e93d174fa2058c`.
    pub version: &'static str,
    pub modules: ModuleNames,
    pub offsets: OffsetTable,
    pub fields: FieldTable,
    pub data: DataOffsets,
}

impl VersionTables {
    /// Tables for the build selected at compile time.
    pub fn active() -> &'static VersionTables {
        ACTIVE
    }

    /// Loader file name for `module`; `None` names the executable itself.
    pub fn module_file(&self, module: HostModule) -> Option<&'static str> {
        match module {
            HostModule::Client => None,
            HostModule::Guard => Some(self.modules.guard),
        }
    }
}

#[cfg(all(feature = "build-4c1f0b", feature = "build-b6e93d"))]
compile_error!("multiple host builds selected; enable exactly one build-* feature");

#[cfg(not(any(feature = "build-4c1f0b", feature = "build-b6e93d")))]
compile_error!("no host build selected; enable exactly one build-* feature");

#[cfg(all(feature = "build-4c1f0b", not(feature = "build-b6e93d")))]
static ACTIVE: &VersionTables = &build_4c1f0b::TABLES;

#[cfg(all(feature = "build-b6e93d", not(feature = "build-4c1f0b")))]
static ACTIVE: &VersionTables = &build_b6e93d::TABLES;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::field::StructKind;
    use crate::offset::Symbol;

    fn all_builds() -> [&'static VersionTables; 2] {
        [&build_4c1f0b::TABLES, &build_b6e93d::TABLES]
    }

    #[cfg(feature = "build-b6e93d")]
    #[test]
    fn test_active_build_is_the_default_feature() {
        assert_eq!(VersionTables::active().version, "version-b6e93d174fa2058c");
    }

    #[test]
    fn test_data_offsets_compose_with_addresses() {
        use crate::address::Address;

        let data = &VersionTables::active().data;
        let world = Address(0x6000).offset_by(data.world.placeholder_to_world);
        let context = world.offset_by(data.world.script_context);
        assert_eq!(
            context.0,
            0x6000 + data.world.placeholder_to_world + data.world.script_context
        );
    }

    #[test]
    fn test_module_file_mapping() {
        let tables = VersionTables::active();
        assert_eq!(tables.module_file(HostModule::Client), None);
        assert_eq!(
            tables.module_file(HostModule::Guard),
            Some(tables.modules.guard)
        );
    }

    #[test]
    fn test_every_build_carries_every_symbol() {
        for tables in all_builds() {
            for symbol in Symbol::iter() {
                assert!(
                    tables.offsets.contains(symbol),
                    "{} missing {symbol}",
                    tables.version
                );
            }
        }
    }

    #[test]
    fn test_every_build_permutation_is_bijective() {
        for tables in all_builds() {
            for kind in StructKind::iter() {
                assert!(
                    tables.fields.is_bijective(kind),
                    "{} slots for {kind} are not a bijection",
                    tables.version
                );
            }
        }
    }

    #[test]
    fn test_every_build_data_offsets_are_complete() {
        for tables in all_builds() {
            assert!(tables.data.is_complete(), "{} has zeroed data offsets", tables.version);
        }
    }

    #[test]
    fn test_builds_agree_on_names_not_numbers() {
        let [old, new] = all_builds();
        assert_ne!(old.version, new.version);

        // Same symbol set, different offsets where the host actually moved.
        let moved = Symbol::iter().any(|symbol| {
            old.offsets.lookup(symbol).unwrap().offset
                != new.offsets.lookup(symbol).unwrap().offset
        });
        assert!(moved);

        // Same member set, at least one reshuffled slot.
        let reshuffled = crate::field::VmMember::iter()
            .any(|member| old.fields.slot_of(member).unwrap() != new.fields.slot_of(member).unwrap());
        assert!(reshuffled);
    }
}
