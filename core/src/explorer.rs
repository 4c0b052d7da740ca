//! API explorer
//!
//! The explorer screen's state: fetched users and posts, the active tab, the
//! search term and the current page of search results.

use serde::{Deserialize, Serialize};

use crate::remote::{FetchStatus, Post, RemoteData, RemoteSource, User};
use crate::view::{search, Page, PageCursor, Paginator};
use crate::Result;

/// Which collection the explorer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerTab {
    #[default]
    Users,
    Posts,
}

#[derive(Debug, Default)]
pub struct ApiExplorer {
    data: RemoteData,
    tab: ExplorerTab,
    search: String,
    cursor: PageCursor,
    paginator: Paginator,
}

impl ApiExplorer {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            paginator,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &RemoteData {
        &self.data
    }

    pub fn status(&self) -> &FetchStatus {
        self.data.status()
    }

    /// Fetch users and posts. A failure is kept in [`Self::status`] as well
    /// as returned.
    pub async fn refresh(&mut self, source: &dyn RemoteSource) -> Result<()> {
        self.data.fetch_all(source).await
    }

    /// Re-run the fetch after a failure
    pub async fn retry(&mut self, source: &dyn RemoteSource) -> Result<()> {
        self.refresh(source).await
    }

    pub fn tab(&self) -> ExplorerTab {
        self.tab
    }

    /// Switch tab, clearing the search term and going back to page 1
    pub fn set_tab(&mut self, tab: ExplorerTab) {
        self.tab = tab;
        self.search.clear();
        self.cursor.reset();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Change the search term, going back to page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.cursor.reset();
    }

    /// Unfiltered `(users, posts)` counts
    pub fn counts(&self) -> (usize, usize) {
        (self.data.users().len(), self.data.posts().len())
    }

    pub fn matching_users(&self) -> Vec<&User> {
        search(self.data.users(), &self.search)
    }

    pub fn matching_posts(&self) -> Vec<&Post> {
        search(self.data.posts(), &self.search)
    }

    /// Current page of matching users
    pub fn users_page(&self) -> Page<&User> {
        self.paginator.page(&self.matching_users(), self.cursor.get())
    }

    /// Current page of matching posts
    pub fn posts_page(&self) -> Page<&Post> {
        self.paginator.page(&self.matching_posts(), self.cursor.get())
    }

    /// Author of `post` among the fetched users
    pub fn author_of(&self, post: &Post) -> Option<&User> {
        post.author(self.data.users())
    }

    pub fn next_page(&mut self) -> usize {
        let count = self.matching_count();
        self.cursor.next(count, &self.paginator)
    }

    pub fn prev_page(&mut self) -> usize {
        let count = self.matching_count();
        self.cursor.prev(count, &self.paginator)
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        let count = self.matching_count();
        self.cursor.go_to(page, count, &self.paginator)
    }

    /// Number of search results on the active tab
    pub fn matching_count(&self) -> usize {
        match self.tab {
            ExplorerTab::Users => self.matching_users().len(),
            ExplorerTab::Posts => self.matching_posts().len(),
        }
    }
}
