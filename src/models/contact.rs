use serde::{Deserialize, Serialize};

/// The subset of a picked contact that ends up in a vCard payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactRecord {
    /// Given and family name joined by a space. Surrounding blanks are
    /// trimmed, line breaks are kept.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim_matches(|c: char| c.is_whitespace() && c != '\n' && c != '\r')
            .to_string()
    }
}
