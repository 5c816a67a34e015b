use serde::{Deserialize, Serialize};

use super::{ContactRecord, ContentKind, WifiNetwork};

/// Structured input for one QR code, tagged by its content kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "fields", rename_all = "lowercase")]
pub enum QrContent {
    Url(String),
    Wifi(WifiNetwork),
    Text(String),
    Contact(ContactRecord),
}

impl QrContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            QrContent::Url(_) => ContentKind::Url,
            QrContent::Wifi(_) => ContentKind::Wifi,
            QrContent::Text(_) => ContentKind::Text,
            QrContent::Contact(_) => ContentKind::Contact,
        }
    }

    /// Empty fields for `kind`, what an input form starts from.
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Url => QrContent::Url(String::new()),
            ContentKind::Wifi => QrContent::Wifi(WifiNetwork::default()),
            ContentKind::Text => QrContent::Text(String::new()),
            ContentKind::Contact => QrContent::Contact(ContactRecord::default()),
        }
    }
}
