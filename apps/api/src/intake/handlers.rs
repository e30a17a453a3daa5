//! Axum route handler for the submission endpoint.
//!
//! Pipeline per request, linear, no retries:
//! parse multipart → validate → check transport → compose → send.

use std::collections::{BTreeMap, HashMap};

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::intake::compose::compose;
use crate::intake::validate::{resolve_recipient, validate};
use crate::intake::{DocumentKind, UploadedFile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// POST /api/v1/applications
///
/// Accepts one multipart job application and emails it to the recipient for
/// the submitted location. Nothing is persisted: the submission lives for
/// exactly one request.
pub async fn handle_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    let (fields, files) = read_multipart(multipart).await?;

    let submission = validate(&fields, files)?;
    let recipient =
        resolve_recipient(&submission.location, state.config.fallback_email.as_deref())?;

    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| AppError::Config("EMAIL_USER and EMAIL_PASSWORD must be set".to_string()))?;
    mailer.verify().await?;

    let sender = state
        .config
        .smtp_user
        .clone()
        .ok_or_else(|| AppError::Config("EMAIL_USER must be set".to_string()))?;
    let mail = compose(&submission, &recipient, &sender);

    tracing::info!(
        position = %submission.position,
        location = %submission.location,
        attachments = mail.attachments.len(),
        "sending application mail"
    );
    mailer.send(&mail).await?;

    Ok(Json(SubmitResponse { success: true }))
}

/// Drains the multipart stream into a scalar-field map and a per-kind file
/// map. Parts named after a document kind are files; everything else is text.
async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(HashMap<String, String>, BTreeMap<DocumentKind, UploadedFile>), AppError> {
    let mut fields = HashMap::new();
    let mut files = BTreeMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match DocumentKind::from_field_name(&name) {
            Some(kind) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // A part with no filename and no content is an unset file input.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                files.insert(
                    kind,
                    UploadedFile {
                        name: file_name,
                        content_type,
                        bytes,
                    },
                );
            }
            None => {
                fields.insert(name, field.text().await?);
            }
        }
    }

    Ok((fields, files))
}
