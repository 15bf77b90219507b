use serde::{Deserialize, Serialize};

/// A single (name, phone) pair from the deduplicated phone listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBasic {
    pub name: String,
    pub phone: String,
}

impl ContactBasic {
    /// Key used to detect duplicate rows: the bare concatenation of name and
    /// phone, no separator. Two distinct pairs can alias (`"A1"` + `"23"`
    /// collides with `"A"` + `"123"`); existing consumers depend on this
    /// dedup granularity, so the key stays as-is.
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.name, self.phone)
    }
}
