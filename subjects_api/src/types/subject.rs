//! Subject records: the course/subject entity managed by the admin page.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a stored subject.
///
/// The backend emits ids as JSON numbers or strings depending on the
/// driver; both decode to the same textual id. Ids are always sent back
/// as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SubjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for SubjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => SubjectId(text),
            RawId::Number(n) => SubjectId(n.to_string()),
        })
    }
}

/// A stored subject, as listed by the backend and sent on update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

impl Subject {
    pub fn new(id: impl Into<SubjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating a subject. The backend assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
}

impl NewSubject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
