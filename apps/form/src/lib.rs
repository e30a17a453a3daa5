//! Headless job-application form client.
//!
//! Holds the form's value type and state machine (`Idle → Submitting →
//! Success/Error`) independent of any UI binding, plus a multipart submitter
//! for the careers API. A UI renders [`FormState`] and forwards edits; the
//! machine owns every transition rule, including the advisory per-file
//! acceptance checks. The server re-validates everything — nothing here is a
//! security boundary.

pub mod client;
pub mod state;
pub mod tables;

pub use client::{build_payload, run_submit, submit, SubmitError};
pub use state::{DocumentSlot, Field, FormFields, FormState, Phase, SelectedFile};
pub use tables::{JOB_POSITIONS, LOCATIONS};
