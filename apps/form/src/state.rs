//! Form value type and state-transition rules.

use std::collections::BTreeMap;

/// Advisory per-file ceiling, matched by the server's authoritative check.
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Media types accepted at selection time: PDF, DOC, DOCX.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// The form's document upload slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentSlot {
    Resume,
    Degree,
    IdProof,
    Experience,
    Certification1,
    Certification2,
    Other,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 7] = [
        DocumentSlot::Resume,
        DocumentSlot::Degree,
        DocumentSlot::IdProof,
        DocumentSlot::Experience,
        DocumentSlot::Certification1,
        DocumentSlot::Certification2,
        DocumentSlot::Other,
    ];

    /// Multipart part name the server expects for this slot.
    pub fn id(&self) -> &'static str {
        match self {
            DocumentSlot::Resume => "resume",
            DocumentSlot::Degree => "degree",
            DocumentSlot::IdProof => "idProof",
            DocumentSlot::Experience => "experience",
            DocumentSlot::Certification1 => "certification1",
            DocumentSlot::Certification2 => "certification2",
            DocumentSlot::Other => "other",
        }
    }

    /// Display label; required slots carry the form's asterisk convention.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentSlot::Resume => "Resume/CV *",
            DocumentSlot::Degree => "Degree Certificate *",
            DocumentSlot::IdProof => "ID Proof *",
            DocumentSlot::Experience => "Experience Certificates",
            DocumentSlot::Certification1 => "Certification 1",
            DocumentSlot::Certification2 => "Certification 2",
            DocumentSlot::Other => "Other Document",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DocumentSlot::Resume | DocumentSlot::Degree | DocumentSlot::IdProof
        )
    }
}

/// Scalar form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Position,
    Location,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
}

/// A file chosen in a file input, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Submission lifecycle. `Submitting` disables the submit control; `Error`
/// and `Success` both return to `Idle` on the next edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: FormFields,
    pub files: BTreeMap<DocumentSlot, SelectedFile>,
    pub phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            fields: FormFields::default(),
            files: BTreeMap::new(),
            phase: Phase::Idle,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates a scalar field. An edit leaves a terminal phase behind;
    /// `Submitting` stays put so an in-flight request keeps its lock on the
    /// submit control.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.fields.full_name = value,
            Field::Email => self.fields.email = value,
            Field::Phone => self.fields.phone = value,
            Field::Position => self.fields.position = value,
            Field::Location => self.fields.location = value,
        }
        self.settle_phase();
    }

    /// Applies the selection-time acceptance rule. A rejected file sets the
    /// error phase and keeps whatever was previously selected in the slot.
    /// Advisory only: the server enforces the same policy authoritatively.
    pub fn select_file(&mut self, slot: DocumentSlot, file: SelectedFile) {
        if !ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
            self.reject_selection(format!(
                "Only PDF, DOC, and DOCX files are allowed for {}",
                slot.id()
            ));
            return;
        }
        if file.bytes.len() > MAX_FILE_BYTES {
            self.reject_selection(format!(
                "File size should be less than 5MB for {}",
                slot.id()
            ));
            return;
        }

        self.files.insert(slot, file);
        self.settle_phase();
    }

    pub fn remove_file(&mut self, slot: DocumentSlot) {
        self.files.remove(&slot);
        self.settle_phase();
    }

    /// Error and Success return to Idle on the next edit; Submitting never
    /// does — only `finish_submit` leaves it, so at most one submission is
    /// in flight.
    fn settle_phase(&mut self) {
        if matches!(self.phase, Phase::Error(_) | Phase::Success) {
            self.phase = Phase::Idle;
        }
    }

    fn reject_selection(&mut self, message: String) {
        // A rejection while a request is in flight must not unlock the
        // submit control either.
        if self.phase != Phase::Submitting {
            self.phase = Phase::Error(message);
        }
    }

    /// Pre-submit validation mirroring the server's rules, with one
    /// difference in shape: the client aggregates every missing label —
    /// fields and documents alike — into a single message before any
    /// network call is made.
    ///
    /// Returns `true` when the form entered `Submitting`.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false; // one in-flight submission at a time
        }

        let missing = self.missing_labels();
        if !missing.is_empty() {
            self.phase = Phase::Error(format!(
                "Please fill all required fields: {}",
                missing.join(", ")
            ));
            return false;
        }

        self.phase = Phase::Submitting;
        true
    }

    /// Records the submission outcome. Success clears everything; failure
    /// preserves the applicant's work so a retry needs no re-entry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.fields = FormFields::default();
            self.files.clear();
            self.phase = Phase::Success;
        } else {
            self.phase = Phase::Error("An error occurred. Please try again.".to_string());
        }
    }

    fn missing_labels(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.fields.full_name.is_empty() {
            missing.push("Full Name");
        }
        if self.fields.email.is_empty() {
            missing.push("Email");
        }
        if self.fields.position.is_empty() {
            missing.push("Job Position");
        }
        if self.fields.location.is_empty() {
            missing.push("Location");
        }
        for slot in DocumentSlot::ALL {
            if slot.is_required() && !self.files.contains_key(&slot) {
                missing.push(slot.label());
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            media_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.4 stub".to_vec(),
        }
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.edit_field(Field::FullName, "Jane Doe");
        form.edit_field(Field::Email, "jane@x.com");
        form.edit_field(Field::Position, "Registered Behavior Technician (RBT)");
        form.edit_field(Field::Location, "Bala Cynwyd Office");
        form.select_file(DocumentSlot::Resume, pdf("cv.pdf"));
        form.select_file(DocumentSlot::Degree, pdf("degree.pdf"));
        form.select_file(DocumentSlot::IdProof, pdf("passport.pdf"));
        form
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = FormState::new();
        assert_eq!(form.phase, Phase::Idle);
        assert!(form.files.is_empty());
        assert_eq!(form.fields, FormFields::default());
    }

    #[test]
    fn test_select_file_accepts_allowed_types() {
        let mut form = FormState::new();
        form.select_file(DocumentSlot::Resume, pdf("cv.pdf"));
        assert!(form.files.contains_key(&DocumentSlot::Resume));
        assert_eq!(form.phase, Phase::Idle);
    }

    #[test]
    fn test_select_file_rejects_wrong_media_type() {
        let mut form = FormState::new();
        form.select_file(
            DocumentSlot::Resume,
            SelectedFile {
                name: "cv.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: vec![0u8; 16],
            },
        );

        assert!(!form.files.contains_key(&DocumentSlot::Resume));
        match &form.phase {
            Phase::Error(msg) => {
                assert!(msg.contains("PDF, DOC, and DOCX"));
                assert!(msg.contains("resume"));
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn test_select_file_rejects_oversized_file() {
        let mut form = FormState::new();
        form.select_file(
            DocumentSlot::Degree,
            SelectedFile {
                name: "degree.pdf".to_string(),
                media_type: "application/pdf".to_string(),
                bytes: vec![0u8; MAX_FILE_BYTES + 1],
            },
        );

        assert!(!form.files.contains_key(&DocumentSlot::Degree));
        assert!(matches!(&form.phase, Phase::Error(msg) if msg.contains("5MB")));
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut form = FormState::new();
        form.select_file(DocumentSlot::Resume, pdf("first.pdf"));
        form.select_file(
            DocumentSlot::Resume,
            SelectedFile {
                name: "second.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: vec![0u8; 16],
            },
        );

        assert_eq!(form.files[&DocumentSlot::Resume].name, "first.pdf");
        assert!(matches!(form.phase, Phase::Error(_)));
    }

    #[test]
    fn test_file_rejection_does_not_block_field_edits() {
        let mut form = FormState::new();
        form.select_file(
            DocumentSlot::Resume,
            SelectedFile {
                name: "cv.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: vec![0u8; 16],
            },
        );
        assert!(matches!(form.phase, Phase::Error(_)));

        form.edit_field(Field::FullName, "Jane Doe");
        assert_eq!(form.phase, Phase::Idle);
        assert_eq!(form.fields.full_name, "Jane Doe");
    }

    #[test]
    fn test_begin_submit_aggregates_all_missing_labels() {
        let mut form = FormState::new();
        form.edit_field(Field::Email, "jane@x.com");
        form.select_file(DocumentSlot::Degree, pdf("degree.pdf"));

        assert!(!form.begin_submit());
        match &form.phase {
            Phase::Error(msg) => {
                assert_eq!(
                    msg,
                    "Please fill all required fields: Full Name, Job Position, Location, \
                     Resume/CV *, ID Proof *"
                );
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn test_begin_submit_with_complete_form_enters_submitting() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert_eq!(form.phase, Phase::Submitting);
    }

    #[test]
    fn test_begin_submit_is_rejected_while_submitting() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.phase, Phase::Submitting);
    }

    #[test]
    fn test_edit_while_submitting_keeps_the_submission_lock() {
        let mut form = filled_form();
        assert!(form.begin_submit());

        // Typing while a request is in flight must not re-enable submit.
        form.edit_field(Field::Phone, "555-0100");
        assert_eq!(form.phase, Phase::Submitting);
        assert!(!form.begin_submit());
        assert_eq!(form.fields.phone, "555-0100");
    }

    #[test]
    fn test_file_changes_while_submitting_keep_the_submission_lock() {
        let mut form = filled_form();
        assert!(form.begin_submit());

        form.select_file(DocumentSlot::Other, pdf("extra.pdf"));
        assert_eq!(form.phase, Phase::Submitting);

        // Even a rejected selection must not surface an error that would
        // unlock the submit control mid-flight.
        form.select_file(
            DocumentSlot::Other,
            SelectedFile {
                name: "extra.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: vec![0u8; 16],
            },
        );
        assert_eq!(form.phase, Phase::Submitting);

        form.remove_file(DocumentSlot::Other);
        assert_eq!(form.phase, Phase::Submitting);
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(true);

        assert_eq!(form.phase, Phase::Success);
        assert_eq!(form.fields, FormFields::default());
        assert!(form.files.is_empty());
    }

    #[test]
    fn test_failed_submit_preserves_form() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(false);

        assert!(matches!(&form.phase, Phase::Error(msg) if msg.contains("try again")));
        assert_eq!(form.fields.full_name, "Jane Doe");
        assert_eq!(form.files.len(), 3);
    }

    #[test]
    fn test_edit_after_success_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(true);
        assert_eq!(form.phase, Phase::Success);

        form.edit_field(Field::Email, "j");
        assert_eq!(form.phase, Phase::Idle);
    }

    #[test]
    fn test_remove_file_makes_slot_required_again() {
        let mut form = filled_form();
        form.remove_file(DocumentSlot::IdProof);

        assert!(!form.begin_submit());
        assert!(matches!(&form.phase, Phase::Error(msg) if msg.contains("ID Proof *")));
    }
}
