pub mod contact;
pub mod content;
pub mod content_kind;
pub mod saved_qr_code;
pub mod style;
pub mod wifi;

pub use contact::ContactRecord;
pub use content::QrContent;
pub use content_kind::ContentKind;
pub use saved_qr_code::SavedQrCode;
pub use style::{CodableColor, QrCodeStyle, QrCornerStyle, QrEyeShape, QrPixelStyle};
pub use wifi::{SecurityKind, WifiNetwork};
