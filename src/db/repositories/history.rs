//! QR history kept as one JSON array under a single key, oldest first.

use anyhow::{Context, Result};
use rusqlite::Connection;
use uuid::Uuid;

use crate::{
    db::{
        repositories::kv_store::{read_value, write_value},
        Database,
    },
    log_debug, log_warn,
    models::SavedQrCode,
};

const ENABLE_LOGS: bool = true;

const SAVED_QR_CODES_KEY: &str = "saved_qr_codes";

/// Stored history, or an empty one when nothing (or nothing readable) is
/// stored.
fn load_history(conn: &Connection) -> Result<Vec<SavedQrCode>> {
    let Some(value) = read_value(conn, SAVED_QR_CODES_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_slice::<Vec<SavedQrCode>>(&value) {
        Ok(codes) => Ok(codes),
        Err(err) => {
            log_warn!("Discarding unreadable QR history: {err}");
            Ok(Vec::new())
        }
    }
}

fn store_history(conn: &Connection, codes: &[SavedQrCode]) -> Result<()> {
    let encoded = serde_json::to_vec(codes).context("failed to serialize QR history")?;
    write_value(conn, SAVED_QR_CODES_KEY, &encoded)
}

impl Database {
    /// Appends `code`. With a non-zero `limit`, the oldest entries beyond it
    /// are dropped.
    pub async fn save_qr_code(&self, code: &SavedQrCode, limit: usize) -> Result<()> {
        let record = code.clone();
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            let mut codes = load_history(&tx)?;
            codes.push(record);

            if limit > 0 && codes.len() > limit {
                let excess = codes.len() - limit;
                codes.drain(..excess);
                log_debug!("Trimmed {excess} QR codes from history");
            }

            store_history(&tx, &codes)?;
            tx.commit().context("failed to commit QR history")?;
            Ok(())
        })
        .await
    }

    pub async fn get_all_qr_codes(&self) -> Result<Vec<SavedQrCode>> {
        self.execute(|conn| load_history(conn)).await
    }

    pub async fn get_qr_code(&self, id: Uuid) -> Result<Option<SavedQrCode>> {
        self.execute(move |conn| {
            Ok(load_history(conn)?.into_iter().find(|code| code.id == id))
        })
        .await
    }

    /// Returns whether a record with `id` existed.
    pub async fn delete_qr_code(&self, id: Uuid) -> Result<bool> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            let mut codes = load_history(&tx)?;
            let before = codes.len();
            codes.retain(|code| code.id != id);

            if codes.len() == before {
                return Ok(false);
            }

            store_history(&tx, &codes)?;
            tx.commit().context("failed to commit QR history")?;
            Ok(true)
        })
        .await
    }
}
