//! Domain value objects and types.
//!
//! Type-safe wrappers for the few CRM concepts the adapter handles locally:
//! module names, record IDs, search criteria, and data-center regions.
//! Everything else (field names, record contents) is delegated to the remote API.

pub mod criteria;
pub mod errors;
pub mod module_name;
pub mod record_id;
pub mod region;

pub use criteria::SearchCriteria;
pub use errors::ValidationError;
pub use module_name::ModuleName;
pub use record_id::RecordId;
pub use region::Region;
