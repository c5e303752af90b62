//! The API boundary consumed by the controller.

use async_trait::async_trait;
use subjects_api::types::{NewSubject, PageResult, Subject, SubjectId};
use subjects_api::{Client, Error, PageQuery};

/// Remote operations on subjects.
///
/// Every call either fully succeeds or fails with a single [`Error`] that may
/// carry a human-readable message.
#[async_trait]
pub trait SubjectsApi: Send + Sync {
    async fn fetch_paginated(&self, page: u32, limit: u32) -> Result<PageResult, Error>;
    async fn create(&self, subject: &NewSubject) -> Result<Subject, Error>;
    async fn update(&self, subject: &Subject) -> Result<Subject, Error>;
    async fn remove(&self, id: &SubjectId) -> Result<(), Error>;
}

#[async_trait]
impl SubjectsApi for Client {
    async fn fetch_paginated(&self, page: u32, limit: u32) -> Result<PageResult, Error> {
        let query = PageQuery::default().with_page(page).with_limit(limit);
        Client::fetch_paginated(self, &query).await
    }

    async fn create(&self, subject: &NewSubject) -> Result<Subject, Error> {
        Client::create(self, subject).await
    }

    async fn update(&self, subject: &Subject) -> Result<Subject, Error> {
        Client::update(self, subject).await
    }

    async fn remove(&self, id: &SubjectId) -> Result<(), Error> {
        Client::remove(self, id).await
    }
}
