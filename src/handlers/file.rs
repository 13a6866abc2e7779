use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use serde_json::json;
use std::path::Path;
use uuid::Uuid;
use chrono::Utc;
use log::info;

use crate::errors::AppError;
use crate::handlers::SharedState;
use crate::models::file::ImportRecord;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Signatures a spreadsheet upload may carry. CSV has none.
const SPREADSHEET_MIME_TYPES: [&str; 4] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/zip",
    "application/x-ole-storage",
];

#[derive(Debug, Clone)]
pub struct ImportPolicy {
    pub max_bytes: usize,
}

fn has_accepted_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Records the name of an uploaded spreadsheet. The content is only sniffed,
/// never parsed.
pub async fn import_file(
    state: SharedState,
    policy: web::Data<ImportPolicy>,
    mut payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|err| AppError::BadRequest(format!("Invalid multipart payload: {}", err)))?;

        let file_name = match field.content_disposition().get_filename() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => continue,
        };

        if !has_accepted_extension(&file_name) {
            return Err(AppError::UnsupportedMediaType(format!(
                "'{}' is not a spreadsheet, expected .xlsx, .xls or .csv",
                file_name
            ))
            .into());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|err| AppError::InternalServerError(format!("Failed to read upload: {}", err)))?;
            if bytes.len() + chunk.len() > policy.max_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "File exceeds the {} byte import limit",
                    policy.max_bytes
                ))
                .into());
            }
            bytes.extend_from_slice(&chunk);
        }

        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Ok(HttpResponse::NoContent().finish());
    };

    let detected_mime = infer::get(&bytes).map(|kind| kind.mime_type().to_string());
    if let Some(mime) = &detected_mime {
        if !SPREADSHEET_MIME_TYPES.contains(&mime.as_str()) {
            return Err(AppError::UnsupportedMediaType(format!(
                "'{}' looks like {}, not a spreadsheet",
                file_name, mime
            ))
            .into());
        }
    }

    info!("Import file selected: {}", file_name);

    let record = ImportRecord {
        id: Uuid::new_v4(),
        file_name,
        size_bytes: bytes.len(),
        detected_mime,
        received_at: Utc::now(),
    };
    state.write().await.record_import(record.clone());

    Ok(HttpResponse::Created().json(record))
}

pub async fn get_imports(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    Ok(HttpResponse::Ok().json(state.imports()))
}

pub async fn export(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    info!("Export requested for {} roster entries", state.roster().len());

    Ok(HttpResponse::Accepted().json(json!({
        "message": "Export requested",
    })))
}
