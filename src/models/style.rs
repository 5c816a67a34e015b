//! Style descriptor carried alongside a payload.
//!
//! The renderer reads it; the codecs never look inside. The JSON shape
//! matches what the app has always written: enum cases use their display
//! names and logo bytes are a base64 string.

use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Background colors a fresh style picks from, as 8-bit RGB.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0, 199, 190),  // mint
    (48, 176, 199), // teal
    (50, 173, 230), // cyan
    (0, 122, 255),  // blue
    (88, 86, 214),  // indigo
    (175, 82, 222), // purple
    (255, 45, 85),  // pink
    (255, 149, 0),  // orange
    (255, 204, 0),  // yellow
    (52, 199, 89),  // green
];

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CodableColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl CodableColor {
    pub const BLACK: CodableColor = CodableColor {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };
    pub const WHITE: CodableColor = CodableColor {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f64 / 255.0,
            green: green as f64 / 255.0,
            blue: blue as f64 / 255.0,
            alpha: 1.0,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let Some(hex_part) = value.strip_prefix('#') else {
            bail!("Invalid color format. Must be hex (#RRGGBB)");
        };
        if hex_part.len() != 6 && hex_part.len() != 8 {
            bail!("Invalid color format. Must be hex (#RRGGBB or #RRGGBBAA)");
        }
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("Invalid color format. Must be hex (#RRGGBB)");
        }

        let channel = |index: usize| -> Result<f64> {
            let byte = u8::from_str_radix(&hex_part[index * 2..index * 2 + 2], 16)?;
            Ok(byte as f64 / 255.0)
        };

        Ok(Self {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
            alpha: if hex_part.len() == 8 { channel(3)? } else { 1.0 },
        })
    }

    pub fn random() -> Self {
        let (red, green, blue) = *PALETTE
            .choose(&mut rand::thread_rng())
            .unwrap_or(&PALETTE[3]);
        Self::rgb8(red, green, blue)
    }

    /// Perceived brightness, `0.299 r + 0.587 g + 0.114 b`.
    pub fn brightness(&self) -> f64 {
        0.299 * self.red + 0.587 * self.green + 0.114 * self.blue
    }

    pub fn is_light(&self) -> bool {
        self.brightness() > 0.5
    }

    /// Module color that stays readable on this background.
    pub fn foreground(&self) -> CodableColor {
        if self.is_light() {
            CodableColor::BLACK
        } else {
            CodableColor::WHITE
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let scale = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            scale(self.alpha),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QrCornerStyle {
    Square,
    #[default]
    Rounded,
    #[serde(rename = "Extra Rounded")]
    ExtraRounded,
}

impl QrCornerStyle {
    pub fn corner_radius_fraction(&self) -> f64 {
        match self {
            QrCornerStyle::Square => 0.0,
            QrCornerStyle::Rounded => 0.5,
            QrCornerStyle::ExtraRounded => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QrPixelStyle {
    #[default]
    Square,
    Circle,
    #[serde(rename = "Rounded Path")]
    RoundedPath,
    #[serde(rename = "Curve")]
    CurvePixel,
    Flower,
    Heart,
    Star,
    Horizontal,
    Vertical,
    Wave,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QrEyeShape {
    Square,
    #[default]
    Circle,
    #[serde(rename = "Rounded")]
    RoundedRect,
    Leaf,
    Shield,
    Fireball,
    Eye,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeStyle {
    pub background_color: CodableColor,
    pub corner_style: QrCornerStyle,
    pub pixel_style: QrPixelStyle,
    pub eye_shape: QrEyeShape,
    /// PNG bytes of the centre logo.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_logo",
        deserialize_with = "deserialize_logo"
    )]
    pub logo_data: Option<Vec<u8>>,
}

impl QrCodeStyle {
    pub fn with_background(background_color: CodableColor) -> Self {
        Self {
            background_color,
            corner_style: QrCornerStyle::default(),
            pixel_style: QrPixelStyle::default(),
            eye_shape: QrEyeShape::default(),
            logo_data: None,
        }
    }

    pub fn foreground_color(&self) -> CodableColor {
        self.background_color.foreground()
    }
}

impl Default for QrCodeStyle {
    fn default() -> Self {
        Self::with_background(CodableColor::random())
    }
}

fn serialize_logo<S>(logo: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use base64::Engine;
    match logo {
        Some(bytes) => {
            serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
        }
        None => serializer.serialize_none(),
    }
}

fn deserialize_logo<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    use base64::Engine;
    let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    base64::engine::general_purpose::STANDARD
        .decode(&encoded)
        .map(Some)
        .map_err(|e: base64::DecodeError| serde::de::Error::custom(e.to_string()))
}
