//! Test doubles shared by the integration tests.

pub mod mock_crm_client;

#[allow(unused_imports)]
pub use mock_crm_client::{MockCrmClient, RecordedCall};
