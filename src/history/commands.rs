use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    codec::{decode_payload_with, encode_payload},
    log_info,
    logo::normalize_logo,
    models::{CodableColor, QrCodeStyle, QrContent, SavedQrCode, SecurityKind},
    render::{PlainRenderer, QrRenderer},
    settings::UserSettings,
    AppState,
};

const ENABLE_LOGS: bool = true;

/// A history entry together with its payload decoded back into form fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadedQrCode {
    pub record: SavedQrCode,
    pub content: QrContent,
}

pub fn prepare_logo(image_bytes: &[u8]) -> Result<Vec<u8>, String> {
    normalize_logo(image_bytes).map_err(|e| e.to_string())
}

pub async fn save_to_history(
    state: &AppState,
    content: QrContent,
    name: String,
    style: Option<QrCodeStyle>,
) -> Result<SavedQrCode, String> {
    let payload = encode_payload(&content);
    if payload.is_empty() {
        return Err("Nothing to save: the payload is empty".to_string());
    }

    let style = style.unwrap_or_else(|| state.settings.default_style());
    let record = SavedQrCode::new(payload, name, style, content.kind());

    state
        .db
        .save_qr_code(&record, state.settings.history_limit())
        .await
        .map_err(|e| e.to_string())?;

    log_info!("Saved {} QR code {}", record.content_type, record.id);
    Ok(record)
}

/// History, newest first.
pub async fn list_history(state: &AppState) -> Result<Vec<SavedQrCode>, String> {
    let mut codes = state
        .db
        .get_all_qr_codes()
        .await
        .map_err(|e| e.to_string())?;
    codes.reverse();
    Ok(codes)
}

pub async fn load_saved_qr_code(state: &AppState, id: Uuid) -> Result<LoadedQrCode, String> {
    let record = state
        .db
        .get_qr_code(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("No saved QR code with id {id}"))?;

    let content = decode_payload_with(
        record.content_type,
        &record.payload,
        &state.settings.wifi_decode_options(),
    );

    Ok(LoadedQrCode { record, content })
}

/// Removing an id that is not in the history is not an error.
pub async fn delete_from_history(state: &AppState, id: Uuid) -> Result<(), String> {
    let removed = state
        .db
        .delete_qr_code(id)
        .await
        .map_err(|e| e.to_string())?;

    if removed {
        log_info!("Deleted QR code {id}");
    }
    Ok(())
}

pub async fn export_png(
    state: &AppState,
    id: Uuid,
    path: &Path,
    size: u32,
) -> Result<PathBuf, String> {
    let record = state
        .db
        .get_qr_code(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("No saved QR code with id {id}"))?;

    let img = PlainRenderer
        .render(&record.payload, &record.style, size)
        .map_err(|e| e.to_string())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    Ok(path.to_path_buf())
}

pub fn get_settings(state: &AppState) -> UserSettings {
    state.settings.get()
}

pub fn update_settings(
    state: &AppState,
    history_limit: Option<usize>,
    wifi_default_security: Option<SecurityKind>,
    background_color: Option<CodableColor>,
) -> Result<UserSettings, String> {
    state
        .settings
        .update(|settings| {
            if let Some(limit) = history_limit {
                settings.history_limit = limit;
            }
            if let Some(security) = wifi_default_security {
                settings.wifi_default_security = security;
            }
            if let Some(color) = background_color {
                settings.default_style.background_color = color;
            }
        })
        .map_err(|e| e.to_string())
}
