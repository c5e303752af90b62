//! Library layer for the subjects admin page: the list controller and its ports.
//!
//! Wraps the `subjects_api` client behind the [`SubjectsApi`] trait and drives
//! a host-supplied [`SubjectView`] through paginated list, create, update and
//! delete cycles.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod messages;
pub mod pagination;
pub mod view;

pub use subjects_api;
pub use subjects_api::types;

pub use api::SubjectsApi;
pub use config::SubjectsConfig;
pub use controller::{SubjectListController, UiEvent};
pub use error::SubjectsError;
pub use form::{SubjectForm, Submission};
pub use messages::{Locale, Messages, MessagesError};
pub use pagination::PaginationState;
pub use view::{Confirm, SubjectView};
