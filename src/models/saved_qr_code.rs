use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContentKind, QrCodeStyle};

/// One entry of the QR history. Immutable once created; removed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedQrCode {
    pub id: Uuid,
    /// Encoded payload. Stored as `url` for every content kind.
    #[serde(rename = "url")]
    pub payload: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub style: QrCodeStyle,
    pub content_type: ContentKind,
}

impl SavedQrCode {
    /// Fresh record stamped with a new id and the current time. An empty
    /// `name` falls back to the payload itself.
    pub fn new(
        payload: impl Into<String>,
        name: impl Into<String>,
        style: QrCodeStyle,
        content_type: ContentKind,
    ) -> Self {
        let payload = payload.into();
        let name = name.into();
        let name = if name.is_empty() { payload.clone() } else { name };

        Self {
            id: Uuid::new_v4(),
            payload,
            name,
            created_at: Utc::now(),
            style,
            content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CodableColor;

    #[test]
    fn empty_name_falls_back_to_payload() {
        let style = QrCodeStyle::with_background(CodableColor::WHITE);
        let record = SavedQrCode::new("https://example.com", "", style, ContentKind::Url);
        assert_eq!(record.name, "https://example.com");
    }

    #[test]
    fn payload_is_serialized_as_url_field() {
        let style = QrCodeStyle::with_background(CodableColor::WHITE);
        let record = SavedQrCode::new(
            "WIFI:S:Home;T:WPA;P:secret1;",
            "Home network",
            style,
            ContentKind::Wifi,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "WIFI:S:Home;T:WPA;P:secret1;");
        assert_eq!(json["contentType"], "wifi");
        assert_eq!(json["name"], "Home network");

        let back: SavedQrCode = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn ids_are_unique_per_record() {
        let style = QrCodeStyle::with_background(CodableColor::BLACK);
        let a = SavedQrCode::new("a", "", style.clone(), ContentKind::Text);
        let b = SavedQrCode::new("a", "", style, ContentKind::Text);
        assert_ne!(a.id, b.id);
    }
}
