pub mod aggregate_queries;
pub mod basic_queries;

pub use aggregate_queries::list_full_contacts;
pub use basic_queries::list_basic_contacts;
