//! The subject edit form and the submission it produces.

use subjects_api::types::{NewSubject, Subject, SubjectId};

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectForm {
    pub id: String,
    pub name: String,
}

/// What a form submission asks the backend to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(NewSubject),
    Update(Subject),
}

impl SubjectForm {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Trims both fields; a blank id means create, anything else update.
    pub fn submission(&self) -> Submission {
        let id = self.id.trim();
        let name = self.name.trim().to_string();
        if id.is_empty() {
            Submission::Create(NewSubject { name })
        } else {
            Submission::Update(Subject {
                id: SubjectId::new(id),
                name,
            })
        }
    }
}
