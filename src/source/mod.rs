pub mod columns;
pub mod row;
pub mod sqlite;

pub use row::{Row, Value};
pub use sqlite::SqliteSource;

use crate::error::ContactResult;

/// The conceptual tables the platform contact store exposes. `Data` is the
/// generic typed-record table; organization rows live there under the
/// [`columns::data::ORGANIZATION`] record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Contacts,
    Phones,
    Emails,
    Data,
    PostalAddresses,
}

/// A query against the record source: which entity, an optional column
/// restriction (`None` means all columns), an optional filter expression
/// with positional `?` arguments, and an optional ordering clause.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub entity: EntityKind,
    pub columns: Option<Vec<String>>,
    pub selection: Option<String>,
    pub selection_args: Vec<String>,
    pub order_by: Option<String>,
}

impl RecordQuery {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            columns: None,
            selection: None,
            selection_args: Vec::new(),
            order_by: None,
        }
    }

    /// Restrict the query to the given columns.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Filter rows by an expression with positional `?` placeholders.
    pub fn filter<I, S>(mut self, expression: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = Some(expression.into());
        self.selection_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn order_by(mut self, expression: impl Into<String>) -> Self {
        self.order_by = Some(expression.into());
        self
    }
}

/// Lazy sequence of decoded rows. The iterator owns whatever cursor backs
/// it, so dropping it mid-iteration releases the cursor.
pub type RowIter = Box<dyn Iterator<Item = ContactResult<Row>>>;

/// Abstraction over the platform's contact storage: takes a [`RecordQuery`],
/// yields column-keyed rows. Failures to open or read surface as
/// [`crate::DataAccessError`].
pub trait RecordSource {
    fn query(&self, query: &RecordQuery) -> ContactResult<RowIter>;
}
