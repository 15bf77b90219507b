pub mod aggregate;
pub mod basic;
pub mod ids;

// Re-exports for convenience
pub use aggregate::{ContactAggregate, EmailEntry, PhoneEntry};
pub use basic::ContactBasic;
pub use ids::ContactId;
