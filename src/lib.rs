pub mod error;
pub mod model;
pub mod queries;
pub mod source;

pub use error::{ContactResult, DataAccessError};
pub use model::{ContactAggregate, ContactBasic, ContactId, EmailEntry, PhoneEntry};
pub use queries::{list_basic_contacts, list_full_contacts};
pub use source::{RecordQuery, RecordSource};
