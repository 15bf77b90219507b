use std::collections::HashSet;

use tracing::debug;

use crate::error::ContactResult;
use crate::model::ContactBasic;
use crate::source::columns::phones;
use crate::source::{EntityKind, RecordQuery, RecordSource};

/// List deduplicated (name, phone) pairs, ordered by display name.
///
/// A null name or number reads as the empty string rather than aborting the
/// listing. Duplicates are detected by [`ContactBasic::dedup_key`]; the
/// first occurrence wins and repeats are skipped silently. An empty source
/// yields an empty list, which is distinct from a query failure.
pub fn list_basic_contacts(source: &dyn RecordSource) -> ContactResult<Vec<ContactBasic>> {
    debug!("listing basic contacts");

    let query = RecordQuery::new(EntityKind::Phones)
        .select([phones::DISPLAY_NAME, phones::NUMBER])
        .order_by(format!("{} ASC", phones::DISPLAY_NAME));

    let mut seen: HashSet<String> = HashSet::new();
    let mut contacts = Vec::new();
    for row in source.query(&query)? {
        let row = row?;
        let contact = ContactBasic {
            name: row.text_or_empty(phones::DISPLAY_NAME)?,
            phone: row.text_or_empty(phones::NUMBER)?,
        };
        if seen.insert(contact.dedup_key()) {
            contacts.push(contact);
        }
    }

    debug!(count = contacts.len(), "basic contact listing assembled");
    Ok(contacts)
}
