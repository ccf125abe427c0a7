use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::utils::path::expand_tilde;

/// Shared credential pair presented by the caller.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Compare against the configured pair. Both fields must be present.
    pub fn authorize(&self, cfg: &Config) -> AppResult<()> {
        match (&self.user, &self.password) {
            (Some(u), Some(p))
                if eq_constant_time(u, &cfg.export_user)
                    && eq_constant_time(p, &cfg.export_password) =>
            {
                Ok(())
            }
            _ => Err(AppError::Unauthorized),
        }
    }
}

fn eq_constant_time(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export every record, most recent first.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path (a leading `~/` is expanded)
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        creds: &Credentials,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        creds.authorize(cfg)?;

        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let events = pool.all()?;

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &events)?,
            ExportFormat::Json => json::write_json(&path, &events)?,
        }

        audit_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} records → {}", events.len(), path.display()),
        );

        notify_export_success(&format.as_str().to_uppercase(), events.len(), &path);
        Ok(())
    }
}
