//! Presentation ports supplied by the host page.

use async_trait::async_trait;
use subjects_api::types::Subject;

use crate::form::SubjectForm;
use crate::messages::Messages;

/// The form, table, page indicator and error modal of the subjects page.
///
/// Implementations own their rendering surface; the controller only reads
/// and writes field values and hands over finished content.
pub trait SubjectView: Send {
    /// Current value of the identifier field.
    fn id_field(&self) -> String;
    /// Current value of the name field.
    fn name_field(&self) -> String;
    fn set_id_field(&mut self, id: &str);
    fn set_name_field(&mut self, name: &str);

    /// Clears every form field.
    fn reset_form(&mut self) {
        self.set_id_field("");
        self.set_name_field("");
    }

    /// Replaces the visible rows, keeping the given order.
    fn render_rows(&mut self, subjects: &[Subject], messages: &Messages);
    fn set_page_indicator(&mut self, text: &str);

    /// Shows a modal with a title, a message and a single acknowledgement control.
    fn show_error(&mut self, title: &str, message: &str, messages: &Messages);

    /// Snapshot of both form fields.
    fn form(&self) -> SubjectForm {
        SubjectForm::new(self.id_field(), self.name_field())
    }
}

/// Interactive yes/no confirmation.
///
/// Blocking prompts complete immediately; asynchronous hosts suspend until
/// the user answers.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}
