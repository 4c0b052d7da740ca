//! Case-insensitive free-text search over remote records

use crate::remote::{Post, User};

/// A record that can be matched against a search term
pub trait Searchable {
    /// The fields a search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any field contains `term`, ignoring case. An empty term
    /// matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.company.name.as_str()]
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

/// Items matching `term`, in their original order
pub fn search<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches_search(term)).collect()
}
