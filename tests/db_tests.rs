use contactbook::error::DataAccessError;
use contactbook::queries::{list_basic_contacts, list_full_contacts};
use contactbook::source::{EntityKind, RecordQuery, RecordSource, SqliteSource};

fn setup() -> SqliteSource {
    SqliteSource::open_in_memory().unwrap()
}

#[test]
fn empty_store_lists_nothing() {
    let source = setup();
    assert!(list_basic_contacts(&source).unwrap().is_empty());
    assert!(list_full_contacts(&source).unwrap().is_empty());
}

#[test]
fn full_listing_orders_by_display_name() {
    let source = setup();
    source.add_contact("Bob", None).unwrap();
    source.add_contact("Alice", None).unwrap();

    let aggregates = list_full_contacts(&source).unwrap();
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].name, "Alice");
    assert_eq!(aggregates[1].name, "Bob");
}

#[test]
fn full_listing_round_trip() {
    let source = setup();
    let alice = source
        .add_contact("Alice", Some("content://photo/1"))
        .unwrap();
    source.add_phone(&alice, "555-0100", 2).unwrap();
    source.add_phone(&alice, "555-0199", 1).unwrap();
    source.add_email(&alice, "alice@example.com", 2).unwrap();
    source
        .add_organization(&alice, Some("Acme"), Some("Engineer"))
        .unwrap();
    source.add_address(&alice, "1 Main St, Springfield").unwrap();

    let bob = source.add_contact("Bob", None).unwrap();

    let aggregates = list_full_contacts(&source).unwrap();
    assert_eq!(aggregates.len(), 2);

    let a = &aggregates[0];
    assert_eq!(a.id, alice);
    assert_eq!(a.name, "Alice");
    assert_eq!(a.phone_numbers.len(), 2);
    assert_eq!(a.phone_numbers[0].number, "555-0100");
    assert_eq!(a.phone_numbers[0].r#type, 2);
    assert_eq!(a.emails.len(), 1);
    assert_eq!(a.emails[0].address, "alice@example.com");
    assert_eq!(a.company, Some("Acme".into()));
    assert_eq!(a.job_title, Some("Engineer".into()));
    assert_eq!(a.addresses, vec!["1 Main St, Springfield"]);
    assert_eq!(a.photo_uri, "content://photo/1");

    let b = &aggregates[1];
    assert_eq!(b.id, bob);
    assert!(b.phone_numbers.is_empty());
    assert!(b.emails.is_empty());
    assert_eq!(b.company, None);
    assert_eq!(b.job_title, None);
    assert!(b.addresses.is_empty());
    assert_eq!(b.photo_uri, "");
}

#[test]
fn basic_listing_dedups_and_orders() {
    let source = setup();
    let bob = source.add_contact("Bob", None).unwrap();
    source.add_phone(&bob, "456", 1).unwrap();

    let alice = source.add_contact("Alice", None).unwrap();
    source.add_phone(&alice, "123", 1).unwrap();
    source.add_phone(&alice, "123", 2).unwrap();

    let contacts = list_basic_contacts(&source).unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Alice");
    assert_eq!(contacts[0].phone, "123");
    assert_eq!(contacts[1].name, "Bob");
    assert_eq!(contacts[1].phone, "456");
}

#[test]
fn org_missing_fields_stay_unset() {
    let source = setup();
    let alice = source.add_contact("Alice", None).unwrap();
    source.add_organization(&alice, Some("Acme"), None).unwrap();

    let aggregates = list_full_contacts(&source).unwrap();
    assert_eq!(aggregates[0].company, Some("Acme".into()));
    assert_eq!(aggregates[0].job_title, None);
}

#[test]
fn org_first_row_wins() {
    let source = setup();
    let alice = source.add_contact("Alice", None).unwrap();
    source
        .add_organization(&alice, Some("Acme"), Some("Boss"))
        .unwrap();
    source
        .add_organization(&alice, Some("Globex"), Some("Minion"))
        .unwrap();

    let aggregates = list_full_contacts(&source).unwrap();
    assert_eq!(aggregates[0].company, Some("Acme".into()));
    assert_eq!(aggregates[0].job_title, Some("Boss".into()));
}

#[test]
fn seeding_unknown_contact_is_rejected() {
    let source = setup();
    let ghost = contactbook::ContactId::new("999");
    let err = source.add_phone(&ghost, "123", 1).unwrap_err();
    assert!(matches!(err, DataAccessError::Query(_)));
}

#[test]
fn unknown_column_surfaces_as_error() {
    let source = setup();
    source.add_contact("Alice", None).unwrap();

    let query = RecordQuery::new(EntityKind::Contacts).select(["no_such_column"]);
    let err = source.query(&query).err().unwrap();
    assert!(matches!(err, DataAccessError::Database(_)));
}

#[test]
fn master_ids_are_stable_strings() {
    let source = setup();
    let id = source.add_contact("Alice", None).unwrap();
    source.add_phone(&id, "123", 1).unwrap();

    let aggregates = list_full_contacts(&source).unwrap();
    assert_eq!(aggregates[0].id, id);
    assert!(!aggregates[0].id.as_str().is_empty());
    assert_eq!(aggregates[0].phone_numbers.len(), 1);
}
