pub mod codec;
pub mod entry;
pub mod plan;
pub mod sync;


pub use codec::{PlaceField, PlaceKey};
pub use entry::{DropReason, Dropped, PlaceEntry};
pub use plan::{StoreOp, WritePlan};
pub use sync::{Repaired, SyncOutcome, Synchronizer, SHORTCUT_LABEL};
