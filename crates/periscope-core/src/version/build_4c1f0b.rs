//! Layout tables for host build `version-4c1f0b2a9d3e87c5`.

use super::{DataOffsets, ModuleNames, NodeOffsets, ScriptOffsets, VersionTables, WorldOffsets};
use crate::field::{FieldTable, SlotEntry, VmMember};
use crate::offset::{HostModule, OffsetEntry, OffsetTable, Symbol};

const VERSION: &str = "version-4c1f0b2a9d3e87c5";

pub static TABLES: VersionTables = VersionTables {
    version: VERSION,
    modules: ModuleNames {
        guard: "guardlayer64.dll",
    },
    offsets: OffsetTable {
        version: VERSION,
        entries: OFFSETS,
    },
    fields: FieldTable {
        version: VERSION,
        entries: SLOTS,
    },
    data: DataOffsets {
        world: WorldOffsets {
            placeholder_to_world: 0x1C0,
            script_context: 0x3D0,
            world_loaded: 0x668,
        },
        script: ScriptOffsets {
            client_source: 0x1B0,
            shared_source: 0x158,
        },
        node: NodeOffsets {
            name: 0x88,
            children: 0x68,
        },
    },
};

const OFFSETS: &[OffsetEntry] = &[
    OffsetEntry {
        symbol: Symbol::Print,
        module: HostModule::Client,
        offset: 0x1542550,
    },
    OffsetEntry {
        symbol: Symbol::RaiseError,
        module: HostModule::Client,
        offset: 0x2779CB0,
    },
    OffsetEntry {
        symbol: Symbol::FetchThreadState,
        module: HostModule::Client,
        offset: 0xBED320,
    },
    OffsetEntry {
        symbol: Symbol::WorldRoot,
        module: HostModule::Client,
        offset: 0x7022FA8,
    },
    OffsetEntry {
        symbol: Symbol::NilObject,
        module: HostModule::Client,
        offset: 0x4DC0C28,
    },
    OffsetEntry {
        symbol: Symbol::Execute,
        module: HostModule::Client,
        offset: 0x27ACBE0,
    },
    OffsetEntry {
        symbol: Symbol::DummyNode,
        module: HostModule::Client,
        offset: 0x4DC0648,
    },
    OffsetEntry {
        symbol: Symbol::OpcodeTable,
        module: HostModule::Client,
        offset: 0x53E6BD0,
    },
    OffsetEntry {
        symbol: Symbol::GuardPageBitmap,
        module: HostModule::Guard,
        offset: 0x247008,
    },
];

const SLOTS: &[SlotEntry] = &[
    SlotEntry {
        member: VmMember::ClosureFunction,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::ClosureEnvironment,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ClosureUpvalues,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ClosureContinuation,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ClosureDebugName,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::ProtoCode,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::ProtoDebugName,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ProtoTypeInfo,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ProtoDebugInsns,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ProtoConstants,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::ThreadGlobals,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::ThreadCallInfo,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ThreadStackSize,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ThreadStack,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ThreadTop,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::TableMetatable,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::TableArraySize,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::TableArray,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::TableFlags,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::TableNode,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::StringLength,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::StringHash,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::StringData,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::StringAtom,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::StringNext,
        slot: 4,
    },
];
