//! Layout tables for host build `version-b6e93d174fa2058c`.

use super::{DataOffsets, ModuleNames, NodeOffsets, ScriptOffsets, VersionTables, WorldOffsets};
use crate::field::{FieldTable, SlotEntry, VmMember};
use crate::offset::{HostModule, OffsetEntry, OffsetTable, Symbol};

const VERSION: &str = "version-b6e93d174fa2058c";

pub static TABLES: VersionTables = VersionTables {
    version: VERSION,
    modules: ModuleNames {
        guard: "guardlayer71.dll",
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
            script_context: 0x3E0,
            world_loaded: 0x678,
        },
        script: ScriptOffsets {
            client_source: 0x1B8,
            shared_source: 0x160,
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
        offset: 0x15A8C30,
    },
    OffsetEntry {
        symbol: Symbol::RaiseError,
        module: HostModule::Client,
        offset: 0x27E11F0,
    },
    OffsetEntry {
        symbol: Symbol::FetchThreadState,
        module: HostModule::Client,
        offset: 0xC013A0,
    },
    OffsetEntry {
        symbol: Symbol::WorldRoot,
        module: HostModule::Client,
        offset: 0x70B5D68,
    },
    OffsetEntry {
        symbol: Symbol::NilObject,
        module: HostModule::Client,
        offset: 0x4E52B48,
    },
    OffsetEntry {
        symbol: Symbol::Execute,
        module: HostModule::Client,
        offset: 0x281D4C0,
    },
    OffsetEntry {
        symbol: Symbol::DummyNode,
        module: HostModule::Client,
        offset: 0x4E52568,
    },
    OffsetEntry {
        symbol: Symbol::OpcodeTable,
        module: HostModule::Client,
        offset: 0x54A0AF0,
    },
    OffsetEntry {
        symbol: Symbol::GuardPageBitmap,
        module: HostModule::Guard,
        offset: 0x24B828,
    },
];

const SLOTS: &[SlotEntry] = &[
    SlotEntry {
        member: VmMember::ClosureFunction,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ClosureEnvironment,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::ClosureUpvalues,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ClosureContinuation,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::ClosureDebugName,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ProtoCode,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ProtoDebugName,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ProtoTypeInfo,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::ProtoDebugInsns,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::ProtoConstants,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ThreadGlobals,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::ThreadCallInfo,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::ThreadStackSize,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::ThreadStack,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::ThreadTop,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::TableMetatable,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::TableArraySize,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::TableArray,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::TableFlags,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::TableNode,
        slot: 1,
    },
    SlotEntry {
        member: VmMember::StringLength,
        slot: 2,
    },
    SlotEntry {
        member: VmMember::StringHash,
        slot: 4,
    },
    SlotEntry {
        member: VmMember::StringData,
        slot: 3,
    },
    SlotEntry {
        member: VmMember::StringAtom,
        slot: 0,
    },
    SlotEntry {
        member: VmMember::StringNext,
        slot: 1,
    },
];
