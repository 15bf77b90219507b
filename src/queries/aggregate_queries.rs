use tracing::debug;

use crate::error::ContactResult;
use crate::model::{ContactAggregate, ContactId, EmailEntry, PhoneEntry};
use crate::source::columns::{contacts, data, emails, phones, postal};
use crate::source::{EntityKind, RecordQuery, RecordSource};

/// Assemble one nested aggregate per contact, in display-name order.
///
/// The master query is fatal on failure and yields no partial output. Each
/// of the four per-contact sub-queries degrades to "no data for that field"
/// on failure, so one bad lookup cannot poison the other fields of the same
/// contact or the rest of the listing.
///
/// This issues 1 + 4N queries for N contacts. Batching them into a join
/// would collapse the per-field failure domains, so the N+1 shape stays.
pub fn list_full_contacts(source: &dyn RecordSource) -> ContactResult<Vec<ContactAggregate>> {
    debug!("listing full contacts");

    let master = RecordQuery::new(EntityKind::Contacts)
        .order_by(format!("{} ASC", contacts::DISPLAY_NAME));

    let mut aggregates = Vec::new();
    for row in source.query(&master)? {
        let row = row?;
        let id = ContactId::new(row.require_text(contacts::ID)?);
        let name = row.text_or_empty(contacts::DISPLAY_NAME)?;
        let photo_uri = row.text_or_empty(contacts::PHOTO_URI)?;

        let mut aggregate = ContactAggregate::new(id, name, photo_uri);
        aggregate.phone_numbers =
            field_or_default(fetch_phones(source, &aggregate.id), &aggregate.id, "phones");
        aggregate.emails =
            field_or_default(fetch_emails(source, &aggregate.id), &aggregate.id, "emails");
        let (company, job_title) = field_or_default(
            fetch_organization(source, &aggregate.id),
            &aggregate.id,
            "organization",
        );
        aggregate.company = company;
        aggregate.job_title = job_title;
        aggregate.addresses = field_or_default(
            fetch_addresses(source, &aggregate.id),
            &aggregate.id,
            "addresses",
        );
        aggregates.push(aggregate);
    }

    debug!(count = aggregates.len(), "full contact listing assembled");
    Ok(aggregates)
}

/// Downgrade a sub-query failure to "no data for this field".
fn field_or_default<T: Default>(result: ContactResult<T>, id: &ContactId, field: &str) -> T {
    result.unwrap_or_else(|err| {
        debug!(contact = %id, field, %err, "sub-query failed, treating as no data");
        T::default()
    })
}

fn fetch_phones(source: &dyn RecordSource, id: &ContactId) -> ContactResult<Vec<PhoneEntry>> {
    let query = RecordQuery::new(EntityKind::Phones)
        .select([phones::NUMBER, phones::TYPE])
        .filter(format!("{} = ?", phones::CONTACT_ID), [id.as_str()]);

    let mut entries = Vec::new();
    for row in source.query(&query)? {
        let row = row?;
        entries.push(PhoneEntry {
            number: row.text_or_empty(phones::NUMBER)?,
            r#type: row.integer_or_zero(phones::TYPE)?,
        });
    }
    Ok(entries)
}

fn fetch_emails(source: &dyn RecordSource, id: &ContactId) -> ContactResult<Vec<EmailEntry>> {
    let query = RecordQuery::new(EntityKind::Emails)
        .select([emails::ADDRESS, emails::TYPE])
        .filter(format!("{} = ?", emails::CONTACT_ID), [id.as_str()]);

    let mut entries = Vec::new();
    for row in source.query(&query)? {
        let row = row?;
        entries.push(EmailEntry {
            address: row.text_or_empty(emails::ADDRESS)?,
            r#type: row.integer_or_zero(emails::TYPE)?,
        });
    }
    Ok(entries)
}

/// Company and job title from the contact's organization record. Only the
/// first matching row is read; any further organization rows are dropped.
fn fetch_organization(
    source: &dyn RecordSource,
    id: &ContactId,
) -> ContactResult<(Option<String>, Option<String>)> {
    let query = RecordQuery::new(EntityKind::Data)
        .select([data::COMPANY, data::TITLE])
        .filter(
            format!("{} = ? AND {} = ?", data::CONTACT_ID, data::RECORD_TYPE),
            [id.as_str(), data::ORGANIZATION],
        );

    match source.query(&query)?.next() {
        Some(row) => {
            let row = row?;
            Ok((row.opt_text(data::COMPANY)?, row.opt_text(data::TITLE)?))
        }
        None => Ok((None, None)),
    }
}

fn fetch_addresses(source: &dyn RecordSource, id: &ContactId) -> ContactResult<Vec<String>> {
    let query = RecordQuery::new(EntityKind::PostalAddresses)
        .select([postal::FORMATTED_ADDRESS])
        .filter(format!("{} = ?", postal::CONTACT_ID), [id.as_str()]);

    let mut addresses = Vec::new();
    for row in source.query(&query)? {
        let row = row?;
        addresses.push(row.text_or_empty(postal::FORMATTED_ADDRESS)?);
    }
    Ok(addresses)
}
