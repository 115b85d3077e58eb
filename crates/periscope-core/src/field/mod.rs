//! Logical-member addressing over the host's scrambled VM structs.

mod accessor;
mod table;

pub use accessor::StructAccessor;
pub use table::{FieldTable, SCRAMBLED_SLOTS, SlotEntry, StructKind, VmMember};
