//! Per-build slot permutations.
//!
//! The host scrambles the field order of its VM object structs on every
//! build: each struct kind is a block of interchangeable pointer-sized slots
//! whose meaning is only defined by the build's permutation. The tables here
//! model whatever order the current build actually uses, so call sites speak
//! stable logical names and a host update is one regenerated table.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::{Error, Result};

/// Number of interchangeable slots in every scrambled struct kind.
pub const SCRAMBLED_SLOTS: usize = 5;

/// VM struct kinds whose layout the host permutes per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StructKind {
    Closure,
    Proto,
    Thread,
    Table,
    String,
}

impl StructKind {
    /// Slot arity of this struct kind.
    pub const fn slot_count(self) -> usize {
        SCRAMBLED_SLOTS
    }

    /// Physical size of one slot.
    ///
    /// A build-time fact of the x64 host, not derived: every scrambled slot
    /// is pointer-sized.
    pub const fn slot_size(self) -> u64 {
        8
    }
}

/// Logical members of the scrambled structs.
///
/// Names are stable across host builds; which physical slot each occupies is
/// not. Callers never see slot numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum VmMember {
    /// Function prototype the closure executes.
    #[strum(serialize = "closure.function")]
    ClosureFunction,
    /// Environment table captured at creation.
    #[strum(serialize = "closure.environment")]
    ClosureEnvironment,
    #[strum(serialize = "closure.upvalues")]
    ClosureUpvalues,
    /// Continuation invoked when a protected call unwinds.
    #[strum(serialize = "closure.continuation")]
    ClosureContinuation,
    #[strum(serialize = "closure.debug_name")]
    ClosureDebugName,

    /// Bytecode stream.
    #[strum(serialize = "proto.code")]
    ProtoCode,
    #[strum(serialize = "proto.constants")]
    ProtoConstants,
    #[strum(serialize = "proto.type_info")]
    ProtoTypeInfo,
    /// Instruction-to-line mapping used by the debugger.
    #[strum(serialize = "proto.debug_insns")]
    ProtoDebugInsns,
    #[strum(serialize = "proto.debug_name")]
    ProtoDebugName,

    /// Per-process global state shared by all threads.
    #[strum(serialize = "thread.globals")]
    ThreadGlobals,
    #[strum(serialize = "thread.top")]
    ThreadTop,
    #[strum(serialize = "thread.stack_size")]
    ThreadStackSize,
    #[strum(serialize = "thread.call_info")]
    ThreadCallInfo,
    #[strum(serialize = "thread.stack")]
    ThreadStack,

    #[strum(serialize = "table.array")]
    TableArray,
    #[strum(serialize = "table.metatable")]
    TableMetatable,
    /// Hash part of the table.
    #[strum(serialize = "table.node")]
    TableNode,
    #[strum(serialize = "table.array_size")]
    TableArraySize,
    #[strum(serialize = "table.flags")]
    TableFlags,

    #[strum(serialize = "string.length")]
    StringLength,
    #[strum(serialize = "string.hash")]
    StringHash,
    /// Interned-atom index, or -1 for plain strings.
    #[strum(serialize = "string.atom")]
    StringAtom,
    /// Next entry in the intern chain.
    #[strum(serialize = "string.next")]
    StringNext,
    #[strum(serialize = "string.data")]
    StringData,
}

impl VmMember {
    /// The struct kind this member belongs to.
    pub const fn kind(self) -> StructKind {
        use VmMember::*;
        match self {
            ClosureFunction | ClosureEnvironment | ClosureUpvalues | ClosureContinuation
            | ClosureDebugName => StructKind::Closure,
            ProtoCode | ProtoConstants | ProtoTypeInfo | ProtoDebugInsns | ProtoDebugName => {
                StructKind::Proto
            }
            ThreadGlobals | ThreadTop | ThreadStackSize | ThreadCallInfo | ThreadStack => {
                StructKind::Thread
            }
            TableArray | TableMetatable | TableNode | TableArraySize | TableFlags => {
                StructKind::Table
            }
            StringLength | StringHash | StringAtom | StringNext | StringData => StructKind::String,
        }
    }

    /// All members of one struct kind.
    pub fn of_kind(kind: StructKind) -> impl Iterator<Item = VmMember> {
        VmMember::iter().filter(move |member| member.kind() == kind)
    }
}

/// One row of a slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
    pub member: VmMember,
    /// Physical slot index under this build, `0..slot_count`.
    pub slot: u8,
}

/// Immutable member-to-slot mapping for one host build.
///
/// Within one build and struct kind the mapping is a total bijection onto
/// `0..slot_count`; a table that is not is a build-time defect, caught by the
/// property tests, never a runtime condition.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    /// Host build id this permutation was taken from.
    pub version: &'static str,
    pub entries: &'static [SlotEntry],
}

impl FieldTable {
    /// Physical slot carrying `member` under this build.
    pub fn slot_of(&self, member: VmMember) -> Result<u8> {
        self.entries
            .iter()
            .find(|entry| entry.member == member)
            .map(|entry| entry.slot)
            .ok_or(Error::UnknownMember {
                member,
                version: self.version,
            })
    }

    /// True when `kind`'s members cover `0..slot_count` exactly once each.
    pub fn is_bijective(&self, kind: StructKind) -> bool {
        let mut seen = [false; SCRAMBLED_SLOTS];
        let mut members = 0usize;
        for member in VmMember::of_kind(kind) {
            members += 1;
            match self.slot_of(member) {
                Ok(slot) if (slot as usize) < kind.slot_count() && !seen[slot as usize] => {
                    seen[slot as usize] = true;
                }
                _ => return false,
            }
        }
        members == kind.slot_count() && seen.iter().all(|claimed| *claimed)
    }
}
