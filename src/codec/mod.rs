//! Payload codecs and the router that picks one by content kind.
//!
//! URL and plain text have no grammar of their own and pass through
//! unchanged. For every well-formed value,
//! `decode_payload(c.kind(), &encode_payload(&c)) == c`.

pub mod contact;
pub mod wifi;

pub use wifi::WifiDecodeOptions;

use crate::models::{ContentKind, QrContent};

pub fn encode_payload(content: &QrContent) -> String {
    match content {
        QrContent::Url(url) => url.clone(),
        QrContent::Text(text) => text.clone(),
        QrContent::Wifi(network) => wifi::encode(network),
        QrContent::Contact(contact) => contact::encode(contact),
    }
}

pub fn decode_payload(kind: ContentKind, payload: &str) -> QrContent {
    decode_payload_with(kind, payload, &WifiDecodeOptions::default())
}

pub fn decode_payload_with(
    kind: ContentKind,
    payload: &str,
    wifi_options: &WifiDecodeOptions,
) -> QrContent {
    match kind {
        ContentKind::Url => QrContent::Url(payload.to_string()),
        ContentKind::Text => QrContent::Text(payload.to_string()),
        ContentKind::Wifi => QrContent::Wifi(wifi::decode_with(payload, wifi_options)),
        ContentKind::Contact => QrContent::Contact(contact::decode(payload)),
    }
}
