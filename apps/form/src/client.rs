//! Multipart submitter for the careers API.

use thiserror::Error;

use crate::state::{FormState, Phase};

/// The server's fixed submission path.
pub const SUBMIT_PATH: &str = "/api/v1/applications";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected submission with status {0}")]
    Rejected(u16),
}

/// Encodes the current form as the multipart payload the server expects:
/// every scalar field (absent optionals as empty strings) plus each selected
/// file under its slot id.
pub fn build_payload(state: &FormState) -> Result<reqwest::multipart::Form, SubmitError> {
    let fields = &state.fields;
    let mut form = reqwest::multipart::Form::new()
        .text("fullName", fields.full_name.clone())
        .text("email", fields.email.clone())
        .text("phone", fields.phone.clone())
        .text("position", fields.position.clone())
        .text("location", fields.location.clone());

    for (slot, file) in &state.files {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)?;
        form = form.part(slot.id(), part);
    }

    Ok(form)
}

/// Sends one submission. No retries: a transport error or non-2xx status is
/// returned to the caller, who resubmits manually.
pub async fn submit(
    client: &reqwest::Client,
    base_url: &str,
    state: &FormState,
) -> Result<(), SubmitError> {
    let response = client
        .post(format!("{base_url}{SUBMIT_PATH}"))
        .multipart(build_payload(state)?)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SubmitError::Rejected(response.status().as_u16()));
    }
    Ok(())
}

/// Drives one full submission through the state machine: pre-submit
/// validation, the network call, and the closing transition. Returns `true`
/// on success.
pub async fn run_submit(
    client: &reqwest::Client,
    base_url: &str,
    state: &mut FormState,
) -> bool {
    if !state.begin_submit() {
        return false;
    }

    let outcome = submit(client, base_url, state).await;
    if let Err(e) = &outcome {
        tracing::debug!("submission failed: {e}");
    }
    state.finish_submit(outcome.is_ok());

    state.phase == Phase::Success
}
