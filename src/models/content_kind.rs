use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// The declared semantic category of a payload. Decides which codec applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Url,
    Wifi,
    Text,
    Contact,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Url,
        ContentKind::Wifi,
        ContentKind::Text,
        ContentKind::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Url => "url",
            ContentKind::Wifi => "wifi",
            ContentKind::Text => "text",
            ContentKind::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentKind::Url => "URL",
            ContentKind::Wifi => "Wi-Fi",
            ContentKind::Text => "Text",
            ContentKind::Contact => "Contact",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "url" => Ok(ContentKind::Url),
            "wifi" => Ok(ContentKind::Wifi),
            "text" => Ok(ContentKind::Text),
            "contact" => Ok(ContentKind::Contact),
            other => Err(anyhow!("unknown content kind '{other}'")),
        }
    }
}
