//! The subjects list controller: pagination cursor plus CRUD round-trips.

use subjects_api::types::{Subject, SubjectId};

use crate::api::SubjectsApi;
use crate::config::SubjectsConfig;
use crate::error::SubjectsError;
use crate::form::Submission;
use crate::messages::{load_messages, Messages};
use crate::pagination::PaginationState;
use crate::view::{Confirm, SubjectView};

/// A user action forwarded by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The form was submitted.
    Submit,
    /// The cancel button was pressed.
    Cancel,
    PreviousPage,
    NextPage,
    /// The page-size selector changed. Zero selects the default size.
    PageSizeChanged(u32),
    /// A row's edit button was pressed.
    Edit(Subject),
    /// A row's delete button was pressed.
    Delete(SubjectId),
}

/// Mediates between the subjects page and the backend.
///
/// Owns the pagination cursor. Every operation takes `&mut self`, so a
/// single controller never has two requests in flight.
///
/// Failures follow a fixed policy: list and save failures are only logged,
/// delete failures are logged and shown in the error modal.
pub struct SubjectListController<A, V, C> {
    api: A,
    view: V,
    confirm: C,
    messages: Messages,
    pagination: PaginationState,
    default_page_size: u32,
    rows: Vec<Subject>,
}

impl<A, V, C> SubjectListController<A, V, C>
where
    A: SubjectsApi,
    V: SubjectView,
    C: Confirm,
{
    pub fn new(api: A, view: V, confirm: C, messages: Messages, page_size: u32) -> Self {
        let pagination = PaginationState::new(page_size);
        Self {
            api,
            view,
            confirm,
            messages,
            default_page_size: pagination.page_size(),
            pagination,
            rows: Vec::new(),
        }
    }

    /// Builds a controller with the configured page size and locale.
    pub fn from_config(
        api: A,
        view: V,
        confirm: C,
        config: &SubjectsConfig,
    ) -> Result<Self, SubjectsError> {
        let messages = load_messages(config.locale)?;
        Ok(Self::new(api, view, confirm, messages, config.default_page_size))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Rows of the last successful load.
    pub fn rows(&self) -> &[Subject] {
        &self.rows
    }

    /// Starts on page 1 and loads it.
    pub async fn initialize(&mut self) {
        self.pagination.rewind();
        self.load_page().await;
    }

    /// Routes a host event to its operation.
    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit => self.submit_subject().await,
            UiEvent::Cancel => self.cancel_edit(),
            UiEvent::PreviousPage => self.go_to_previous_page().await,
            UiEvent::NextPage => self.go_to_next_page().await,
            UiEvent::PageSizeChanged(size) => self.change_page_size(size).await,
            UiEvent::Edit(subject) => self.edit_subject(&subject),
            UiEvent::Delete(id) => self.request_delete(&id).await,
        }
    }

    /// Fetches the current page and re-renders the table and indicator.
    ///
    /// On failure the table keeps its previous rows and nothing is shown
    /// to the user.
    pub async fn load_page(&mut self) {
        if let Err(e) = self.try_load_page().await {
            tracing::error!("Error loading subjects: {}", e);
        }
    }

    async fn try_load_page(&mut self) -> Result<(), SubjectsError> {
        let page = self.pagination.current_page();
        let limit = self.pagination.page_size();
        tracing::debug!("Loading subjects page {} (limit {})", page, limit);

        let result = self.api.fetch_paginated(page, limit).await?;

        self.view.render_rows(&result.subjects, &self.messages);
        self.rows = result.subjects;
        self.pagination.apply_total(result.total);
        let indicator = self.pagination.indicator(&self.messages);
        self.view.set_page_indicator(&indicator);
        Ok(())
    }

    /// Creates or updates from the form, then reloads the current page.
    ///
    /// A failed save leaves the form populated for another attempt.
    pub async fn submit_subject(&mut self) {
        let submission = self.view.form().submission();
        let outcome = match &submission {
            Submission::Update(subject) => self.api.update(subject).await,
            Submission::Create(subject) => self.api.create(subject).await,
        };

        match outcome {
            Ok(saved) => {
                tracing::info!("Saved subject {} ({})", saved.id, saved.name);
                self.view.reset_form();
                self.view.set_id_field("");
                self.load_page().await;
            }
            Err(e) => tracing::error!("Error saving subject: {}", e),
        }
    }

    /// Leaves edit mode by clearing the id field. The name is kept.
    pub fn cancel_edit(&mut self) {
        self.view.set_id_field("");
    }

    /// Copies a row into the form for editing.
    pub fn edit_subject(&mut self, subject: &Subject) {
        self.view.set_id_field(subject.id.as_str());
        self.view.set_name_field(&subject.name);
    }

    /// Asks for confirmation, then deletes and reloads.
    pub async fn request_delete(&mut self, id: &SubjectId) {
        if !self.confirm.confirm(&self.messages.delete_confirm).await {
            tracing::debug!("Deletion of subject {} cancelled", id);
            return;
        }

        match self.api.remove(id).await {
            Ok(()) => {
                tracing::info!("Deleted subject {}", id);
                self.load_page().await;
            }
            Err(e) => {
                let message = e
                    .message()
                    .unwrap_or(self.messages.delete_error_default.as_str())
                    .to_string();
                self.view
                    .show_error(&self.messages.error_title, &message, &self.messages);
                tracing::error!("Error deleting subject {}: {}", id, e);
            }
        }
    }

    /// Switches page size, rewinds to page 1 and reloads.
    pub async fn change_page_size(&mut self, size: u32) {
        let size = if size == 0 { self.default_page_size } else { size };
        self.pagination.resize(size);
        self.load_page().await;
    }

    pub async fn go_to_previous_page(&mut self) {
        if self.pagination.retreat() {
            self.load_page().await;
        }
    }

    pub async fn go_to_next_page(&mut self) {
        if self.pagination.advance() {
            self.load_page().await;
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
