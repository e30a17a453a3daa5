//! Application intake — the submission domain model and fixed routing tables.

pub mod compose;
pub mod handlers;
pub mod validate;

use std::collections::BTreeMap;

use bytes::Bytes;

/// Where each office's applications are delivered. Compiled in on purpose:
/// the recipient list changes with office staffing, not deployment config.
pub const LOCATION_RECIPIENTS: &[(&str, &str)] = &[
    ("Bala Cynwyd Office", "qwenton.balawejder@batp.org"),
    ("Philadelphia Office", "samantha.power@batp.org"),
    ("South Philadelphia Satellite Office", "williampower@batp.org"),
];

/// Looks up the recipient for a location. `None` means the caller should fall
/// back to the configured fallback address.
pub fn recipient_for(location: &str) -> Option<&'static str> {
    LOCATION_RECIPIENTS
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, addr)| *addr)
}

/// The fixed categories of uploaded document.
///
/// Enum order is the canonical order: body lines and attachments always
/// follow `ALL`, never upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentKind {
    Resume,
    Degree,
    IdProof,
    Experience,
    Certification1,
    Certification2,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::Resume,
        DocumentKind::Degree,
        DocumentKind::IdProof,
        DocumentKind::Experience,
        DocumentKind::Certification1,
        DocumentKind::Certification2,
        DocumentKind::Other,
    ];

    /// Wire key for the multipart part carrying this document.
    pub fn field_name(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Degree => "degree",
            DocumentKind::IdProof => "idProof",
            DocumentKind::Experience => "experience",
            DocumentKind::Certification1 => "certification1",
            DocumentKind::Certification2 => "certification2",
            DocumentKind::Other => "other",
        }
    }

    /// Human-readable label used in the composed mail body.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume/CV",
            DocumentKind::Degree => "Degree Certificate",
            DocumentKind::IdProof => "ID Proof",
            DocumentKind::Experience => "Experience Certificates",
            DocumentKind::Certification1 => "Certification 1",
            DocumentKind::Certification2 => "Certification 2",
            DocumentKind::Other => "Other Document",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DocumentKind::Resume | DocumentKind::Degree | DocumentKind::IdProof
        )
    }

    pub fn from_field_name(name: &str) -> Option<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.field_name() == name)
    }
}

/// A file received in the multipart request, held fully in memory.
/// The per-file policy (5 MiB, PDF/DOC/DOCX) keeps this bounded.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A validated applicant submission. Request-scoped: constructed from the
/// multipart body, consumed by the composer, never persisted.
#[derive(Debug, Clone)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub location: String,
    pub documents: BTreeMap<DocumentKind, UploadedFile>,
}
