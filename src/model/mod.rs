//! # Data Model
//!
//! Typed entities for both resource families, with their creation drafts
//! and partial-update patches. Wire field names are camelCase.
//!
//! Reference fields (`listId`, `dealerId`, `carMakeId`) are opaque strings
//! with no existence check against the referenced collection; dangling
//! references are permitted.

pub mod car;
pub mod dealer;
pub mod item;
pub mod list;
pub mod make;

pub use car::{Car, CarDraft, CarPatch};
pub use dealer::{CarDealer, CarDealerDraft, CarDealerPatch};
pub use item::{Item, ItemDraft, ItemPatch};
pub use list::{List, ListDraft, ListPatch};
pub use make::{CarMake, CarMakeDraft, CarMakePatch};
