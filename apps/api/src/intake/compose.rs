//! Mail composition — turns a validated submission into a deliverable message.

use bytes::Bytes;

use crate::intake::{DocumentKind, Submission};

/// Display name used on every outgoing application mail.
pub const FROM_DISPLAY_NAME: &str = "Job Applications";

#[derive(Debug, Clone)]
pub struct MailAttachment {
    /// `<documentKind>_<original filename>`, so recipients can sort a
    /// directory of downloads without opening anything.
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// A fully composed application mail, transport-agnostic.
#[derive(Debug, Clone)]
pub struct ComposedMail {
    pub from_name: &'static str,
    pub from_address: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<MailAttachment>,
}

/// Builds the outgoing message for a validated submission.
///
/// The body always carries one Yes/No line per document kind in canonical
/// order — "Yes" means the part was present in the request, nothing more.
/// Attachments follow the same order, not upload order.
pub fn compose(submission: &Submission, recipient: &str, sender: &str) -> ComposedMail {
    let phone = submission.phone.as_deref().unwrap_or("Not provided");

    let mut body = format!(
        "Job Application Details:\n\
         \n\
         Candidate Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Position: {}\n\
         Location: {}\n\
         \n\
         Documents Submitted:\n",
        submission.full_name, submission.email, phone, submission.position, submission.location,
    );
    for kind in DocumentKind::ALL {
        let submitted = if submission.documents.contains_key(&kind) {
            "Yes"
        } else {
            "No"
        };
        body.push_str(&format!("- {}: {}\n", kind.label(), submitted));
    }

    let attachments = DocumentKind::ALL
        .into_iter()
        .filter_map(|kind| submission.documents.get(&kind).map(|file| (kind, file)))
        .map(|(kind, file)| MailAttachment {
            filename: format!("{}_{}", kind.field_name(), file.name),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
        })
        .collect();

    ComposedMail {
        from_name: FROM_DISPLAY_NAME,
        from_address: sender.to_string(),
        to: recipient.to_string(),
        subject: format!(
            "New Application for {} - {}",
            submission.position, submission.location
        ),
        body,
        attachments,
    }
}
