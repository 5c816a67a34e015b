use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SecurityKind {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPassword,
}

impl SecurityKind {
    /// Token used in the `T:` segment of a Wi-Fi payload.
    pub fn code(&self) -> &'static str {
        match self {
            SecurityKind::Wpa => "WPA",
            SecurityKind::Wep => "WEP",
            SecurityKind::NoPassword => "nopass",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "WPA" => Some(SecurityKind::Wpa),
            "WEP" => Some(SecurityKind::Wep),
            "nopass" => Some(SecurityKind::NoPassword),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
    pub is_hidden: bool,
    pub security_type: SecurityKind,
}
