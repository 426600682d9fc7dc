//! Response extraction from LLM-style nodes.

pub mod record;
pub mod responses;
pub mod validate;

pub use record::{ResponseRecord, Validation};
pub use responses::extract_responses;
