//! Submission validation — pure checks over the raw field and file maps.

use std::collections::{BTreeMap, HashMap};

use crate::errors::AppError;
use crate::intake::{DocumentKind, Submission, UploadedFile};

/// Per-file size ceiling. The browser form advertises the same limit, but
/// the client check is advisory only; this is the authoritative one.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted document media types: PDF, DOC, DOCX.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Required scalar fields, checked in this order. The first missing field
/// short-circuits; document violations below are aggregated instead. The
/// asymmetry is intentional and mirrors what applicants see in the form.
const REQUIRED_FIELDS: [&str; 4] = ["fullName", "email", "position", "location"];

/// Validates the raw multipart content and assembles a `Submission`.
///
/// No side effects: recipient resolution and transport checks happen later
/// in the handler pipeline.
pub fn validate(
    fields: &HashMap<String, String>,
    files: BTreeMap<DocumentKind, UploadedFile>,
) -> Result<Submission, AppError> {
    for field in REQUIRED_FIELDS {
        match fields.get(field) {
            Some(value) if !value.is_empty() => {}
            _ => return Err(AppError::MissingField(field)),
        }
    }

    let missing: Vec<&'static str> = DocumentKind::ALL
        .into_iter()
        .filter(|kind| kind.is_required() && !files.contains_key(kind))
        .map(|kind| kind.field_name())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingDocuments(missing));
    }

    for (kind, file) in &files {
        if file.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::FilePolicy(format!(
                "File size should be less than 5MB for {}",
                kind.field_name()
            )));
        }
        if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
            return Err(AppError::FilePolicy(format!(
                "Only PDF, DOC, and DOCX files are allowed for {}",
                kind.field_name()
            )));
        }
    }

    let get = |name: &str| fields.get(name).cloned().unwrap_or_default();

    Ok(Submission {
        full_name: get("fullName"),
        email: get("email"),
        phone: fields.get("phone").filter(|p| !p.is_empty()).cloned(),
        position: get("position"),
        location: get("location"),
        documents: files,
    })
}

/// Resolves the delivery address for a location, falling back to the
/// configured address for locations outside the fixed table. No fallback
/// configured is a server fault, not a validation error.
pub fn resolve_recipient(
    location: &str,
    fallback: Option<&str>,
) -> Result<String, AppError> {
    match crate::intake::recipient_for(location) {
        Some(addr) => Ok(addr.to_string()),
        None => fallback.map(str::to_string).ok_or_else(|| {
            AppError::Config(format!(
                "No recipient for location '{location}' and FALLBACK_EMAIL is not set"
            ))
        }),
    }
}
