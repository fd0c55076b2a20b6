//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are completely
//! separate from the internal domain models in `src/models/` and handle
//! serialization, deserialization, and domain-model conversion.

pub mod briefings;
pub mod generate;
pub mod profile;

// Re-export all public types for convenient access via `dto::*`.
pub use briefings::*;
pub use generate::*;
pub use profile::*;
