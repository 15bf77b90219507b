use contactbook::model::{ContactAggregate, ContactBasic, ContactId, EmailEntry, PhoneEntry};

#[test]
fn dedup_key_is_bare_concatenation() {
    let contact = ContactBasic {
        name: "Alice".into(),
        phone: "123".into(),
    };
    assert_eq!(contact.dedup_key(), "Alice123");

    // The documented aliasing: distinct pairs, same key.
    let a = ContactBasic {
        name: "A1".into(),
        phone: "23".into(),
    };
    let b = ContactBasic {
        name: "A".into(),
        phone: "123".into(),
    };
    assert_eq!(a.dedup_key(), b.dedup_key());
}

#[test]
fn aggregate_serializes_host_payload_shape() {
    let mut aggregate = ContactAggregate::new(ContactId::new("1"), "Carol".into(), String::new());
    aggregate.phone_numbers.push(PhoneEntry {
        number: "555-0100".into(),
        r#type: 2,
    });
    aggregate.emails.push(EmailEntry {
        address: "carol@example.com".into(),
        r#type: 1,
    });

    let json = serde_json::to_value(&aggregate).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["name"], "Carol");
    assert_eq!(json["phoneNumbers"][0]["number"], "555-0100");
    assert_eq!(json["phoneNumbers"][0]["type"], 2);
    assert_eq!(json["emails"][0]["address"], "carol@example.com");
    assert_eq!(json["photoUri"], "");

    // Unset organization fields are omitted, not null.
    assert!(json.get("company").is_none());
    assert!(json.get("jobTitle").is_none());
}

#[test]
fn aggregate_json_round_trip() {
    let mut aggregate = ContactAggregate::new(
        ContactId::new("7"),
        "Dave".into(),
        "content://photo/7".into(),
    );
    aggregate.company = Some("Acme".into());
    aggregate.addresses.push("1 Main St".into());

    let json = serde_json::to_string(&aggregate).unwrap();
    let back: ContactAggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, aggregate);
}

#[test]
fn minimal_aggregate_deserializes_with_unset_org() {
    let json = r#"{
        "id": "1",
        "name": "Carol",
        "phoneNumbers": [],
        "emails": [],
        "addresses": [],
        "photoUri": ""
    }"#;
    let aggregate: ContactAggregate = serde_json::from_str(json).unwrap();
    assert_eq!(aggregate.company, None);
    assert_eq!(aggregate.job_title, None);
}
