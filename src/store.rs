//! Application Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state
//! transitions live on `FormState` so they can be exercised without a DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FormError;
use crate::fields::{DocumentFlag, TextField};
use crate::models::ApplicationRecord;

pub const SUCCESS_MESSAGE: &str = "Application submitted successfully.";

/// Status line under the form buttons
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormMessage::Error(_))
    }
}

/// Identifies one photo read; stale tickets are ignored on completion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoTicket(u32);

/// Result of pressing Submit
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight
    Busy,
    /// Rejected locally, nothing to send
    Rejected(FormError),
    /// JSON body to POST
    Ready(String),
}

/// Form screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub record: ApplicationRecord,
    pub submitting: bool,
    pub message: Option<FormMessage>,
    /// Bumped whenever a pending photo read must be discarded
    pub photo_generation: u32,
    /// Number of resets, watched by inputs the record cannot drive
    pub resets: u32,
}

impl FormState {
    /// Start reading a newly picked photo
    pub fn begin_photo_read(&mut self) -> PhotoTicket {
        self.photo_generation = self.photo_generation.wrapping_add(1);
        PhotoTicket(self.photo_generation)
    }

    /// Store the read result if nothing superseded it. Returns whether it was applied.
    pub fn complete_photo_read(&mut self, ticket: PhotoTicket, data_url: String) -> bool {
        if ticket.0 != self.photo_generation {
            return false;
        }
        self.record.photo_data_url = Some(data_url);
        true
    }

    /// File selection emptied
    pub fn clear_photo(&mut self) {
        self.photo_generation = self.photo_generation.wrapping_add(1);
        self.record.photo_data_url = None;
    }

    /// Back to the empty baseline, photo and pending reads included
    pub fn reset(&mut self) {
        self.record = ApplicationRecord::default();
        self.photo_generation = self.photo_generation.wrapping_add(1);
        self.resets = self.resets.wrapping_add(1);
    }

    /// Validate and mark the submission in flight
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.submitting {
            return SubmitStart::Busy;
        }
        self.message = None;

        if !self.record.has_required_names() {
            return self.reject(FormError::MissingName);
        }
        match self.record.to_json() {
            Ok(body) => {
                self.submitting = true;
                SubmitStart::Ready(body)
            }
            Err(e) => self.reject(FormError::Transport(e.to_string())),
        }
    }

    fn reject(&mut self, error: FormError) -> SubmitStart {
        self.message = Some(FormMessage::Error(error.to_string()));
        SubmitStart::Rejected(error)
    }

    /// Apply the outcome of the request started by `begin_submit`
    pub fn finish_submit(&mut self, outcome: Result<(), FormError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.reset();
                self.message = Some(FormMessage::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(e) => {
                self.message = Some(FormMessage::Error(e.to_string()));
            }
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_text(store: &FormStore, field: TextField, value: String) {
    store.record().write().set_text(field, value);
}

pub fn store_set_document(store: &FormStore, flag: DocumentFlag, checked: bool) {
    store.record().write().set_document(flag, checked);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ParentField;

    const PHOTO: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

    fn named_state() -> FormState {
        let mut state = FormState::default();
        state.record.set_text(TextField::FirstName, "Asha".to_string());
        state.record.set_text(TextField::LastName, "Patil".to_string());
        state
    }

    #[test]
    fn test_missing_first_name_rejected() {
        let mut state = FormState::default();
        state.record.set_text(TextField::LastName, "Patil".to_string());

        assert_eq!(state.begin_submit(), SubmitStart::Rejected(FormError::MissingName));
        assert!(!state.submitting);
        assert_eq!(
            state.message,
            Some(FormMessage::Error("Please provide student's first and last name.".to_string()))
        );
        assert_eq!(state.record.student.last_name, "Patil");
    }

    #[test]
    fn test_missing_last_name_rejected() {
        let mut state = FormState::default();
        state.record.set_text(TextField::FirstName, "Asha".to_string());
        assert_eq!(state.begin_submit(), SubmitStart::Rejected(FormError::MissingName));
    }

    #[test]
    fn test_whitespace_names_rejected() {
        let mut state = FormState::default();
        state.record.set_text(TextField::FirstName, "   ".to_string());
        state.record.set_text(TextField::LastName, "\t".to_string());
        assert_eq!(state.begin_submit(), SubmitStart::Rejected(FormError::MissingName));
        assert!(!state.submitting);
    }

    #[test]
    fn test_begin_submit_serializes_record() {
        let mut state = named_state();
        state.message = Some(FormMessage::Error("old".to_string()));

        let SubmitStart::Ready(body) = state.begin_submit() else {
            panic!("expected Ready");
        };
        assert!(state.submitting);
        assert_eq!(state.message, None);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["firstName"], "Asha");
        assert_eq!(json["lastName"], "Patil");
    }

    #[test]
    fn test_second_submit_while_pending_is_busy() {
        let mut state = named_state();
        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
        assert_eq!(state.begin_submit(), SubmitStart::Busy);
        assert!(state.submitting);
    }

    #[test]
    fn test_success_resets_everything() {
        let mut state = named_state();
        state.record.set_text(TextField::Mother(ParentField::Email), "sunita@example.org".to_string());
        state.record.set_document(DocumentFlag::BirthCert, true);
        let ticket = state.begin_photo_read();
        state.complete_photo_read(ticket, PHOTO.to_string());

        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
        state.finish_submit(Ok(()));

        assert!(!state.submitting);
        assert_eq!(state.record, ApplicationRecord::default());
        assert_eq!(state.record.photo_data_url, None);
        assert_eq!(state.message, Some(FormMessage::Success(SUCCESS_MESSAGE.to_string())));
    }

    #[test]
    fn test_failure_keeps_record() {
        let mut state = named_state();
        state.record.set_text(TextField::EmergencyContact, "020-555-0101".to_string());
        let before = state.record.clone();

        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
        state.finish_submit(Err(FormError::Server("X".to_string())));

        assert!(!state.submitting);
        assert_eq!(state.record, before);
        let message = state.message.clone().unwrap();
        assert!(message.is_error());
        assert!(message.text().contains('X'));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut state = named_state();
        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
        state.finish_submit(Err(FormError::Transport("Failed to fetch".to_string())));
        assert_eq!(state.message.as_ref().map(FormMessage::text), Some("Submission failed: Failed to fetch"));
        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
    }

    #[test]
    fn test_photo_null_until_read_completes() {
        let mut state = FormState::default();
        let ticket = state.begin_photo_read();
        assert_eq!(state.record.photo_data_url, None);

        assert!(state.complete_photo_read(ticket, PHOTO.to_string()));
        assert!(state.record.photo_data_url.as_deref().unwrap().starts_with("data:"));
    }

    #[test]
    fn test_clear_photo() {
        let mut state = FormState::default();
        let ticket = state.begin_photo_read();
        state.complete_photo_read(ticket, PHOTO.to_string());

        state.clear_photo();
        assert_eq!(state.record.photo_data_url, None);
    }

    #[test]
    fn test_stale_photo_read_is_dropped() {
        let mut state = FormState::default();
        let first = state.begin_photo_read();
        let second = state.begin_photo_read();

        assert!(state.complete_photo_read(second, "data:image/png;base64,BBBB".to_string()));
        assert!(!state.complete_photo_read(first, "data:image/png;base64,AAAA".to_string()));
        assert_eq!(state.record.photo_data_url.as_deref(), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn test_reset_discards_pending_photo() {
        let mut state = named_state();
        let ticket = state.begin_photo_read();
        state.reset();
        assert!(!state.complete_photo_read(ticket, PHOTO.to_string()));
        assert_eq!(state.record, ApplicationRecord::default());
    }

    #[test]
    fn test_reset_restores_baseline_after_edits() {
        let mut state = named_state();
        for field in TextField::all() {
            state.record.set_text(field, "x".to_string());
        }
        for flag in DocumentFlag::ALL {
            state.record.set_document(flag, true);
        }
        let ticket = state.begin_photo_read();
        state.complete_photo_read(ticket, PHOTO.to_string());

        state.reset();
        assert_eq!(state.record, ApplicationRecord::default());
    }

    #[test]
    fn test_reset_and_success_count_resets() {
        let mut state = named_state();
        state.reset();
        assert_eq!(state.resets, 1);

        state.record.set_text(TextField::FirstName, "Asha".to_string());
        state.record.set_text(TextField::LastName, "Patil".to_string());
        assert!(matches!(state.begin_submit(), SubmitStart::Ready(_)));
        state.finish_submit(Ok(()));
        assert_eq!(state.resets, 2);

        assert!(matches!(state.begin_submit(), SubmitStart::Rejected(_)));
        state.finish_submit(Err(FormError::Server("Unknown error".to_string())));
        assert_eq!(state.resets, 2);
    }
}
