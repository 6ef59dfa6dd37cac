//! Registration form domain: field catalog, entry lists and the form-state record

pub mod catalog;
pub mod entries;
pub mod fields;
pub mod payload;
pub mod state;

pub use entries::{EntryId, EntryList};
pub use payload::RegistrationPayload;
pub use state::{FieldRef, FluidEntry, FormState, ServicePricing, ServiceToggleMap, StaffEntry};
