//! Column names for each record-source entity. Queries and row decoding go
//! through these constants so the aggregation logic never carries bare
//! string keys.

pub mod contacts {
    pub const ID: &str = "_id";
    pub const DISPLAY_NAME: &str = "display_name";
    pub const PHOTO_URI: &str = "photo_uri";
}

pub mod phones {
    pub const CONTACT_ID: &str = "contact_id";
    pub const DISPLAY_NAME: &str = "display_name";
    pub const NUMBER: &str = "number";
    pub const TYPE: &str = "type";
}

pub mod emails {
    pub const CONTACT_ID: &str = "contact_id";
    pub const ADDRESS: &str = "address";
    pub const TYPE: &str = "type";
}

pub mod data {
    pub const CONTACT_ID: &str = "contact_id";
    pub const RECORD_TYPE: &str = "record_type";
    pub const COMPANY: &str = "company";
    pub const TITLE: &str = "title";

    /// Record-type discriminator for organization rows.
    pub const ORGANIZATION: &str = "organization";
}

pub mod postal {
    pub const CONTACT_ID: &str = "contact_id";
    pub const FORMATTED_ADDRESS: &str = "formatted_address";
}
