use serde::{Deserialize, Serialize};

use super::ids::ContactId;

/// One phone number of a contact. `type` is the platform's category code
/// (home/work/mobile/...), passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub number: String,
    pub r#type: i64,
}

/// One email address of a contact, same pass-through semantics as
/// [`PhoneEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    pub address: String,
    pub r#type: i64,
}

/// A contact's merged view across phone, email, organization and postal
/// sub-records. Serialized with the camelCase keys the host application
/// consumes; unset organization fields are omitted rather than null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAggregate {
    pub id: ContactId,
    pub name: String,
    pub phone_numbers: Vec<PhoneEntry>,
    pub emails: Vec<EmailEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub addresses: Vec<String>,
    pub photo_uri: String,
}

impl ContactAggregate {
    /// An aggregate with only the master-row fields filled in; sub-record
    /// fields start empty/unset and are populated per sub-query.
    pub fn new(id: ContactId, name: String, photo_uri: String) -> Self {
        Self {
            id,
            name,
            phone_numbers: Vec::new(),
            emails: Vec::new(),
            company: None,
            job_title: None,
            addresses: Vec::new(),
            photo_uri,
        }
    }
}
