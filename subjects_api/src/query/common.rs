//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Queries with no parameters of their own (create, update, delete).
impl Query for () {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}
