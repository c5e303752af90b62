mod subject;
pub use self::subject::{NewSubject, Subject, SubjectId};

mod page;
pub use self::page::PageResult;
