//! Aggregated remote state
//!
//! Both collections are requested together and revealed together. A failure
//! of either request leaves the previously fetched data in place.

use tracing::{debug, warn};

use super::model::{Post, User};
use super::source::RemoteSource;
use crate::{Error, Result};

/// Lifecycle of the last fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Users and posts plus the state of the fetch that produced them
#[derive(Debug, Clone, Default)]
pub struct RemoteData {
    users: Vec<User>,
    posts: Vec<Post>,
    status: FetchStatus,
}

impl RemoteData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Message of the last failed fetch, cleared when the next one starts
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Mark a fetch as started
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Apply the outcome of both requests
    pub fn complete(&mut self, users: Result<Vec<User>>, posts: Result<Vec<Post>>) -> Result<()> {
        match aggregate(users, posts) {
            Ok((users, posts)) => {
                debug!(users = users.len(), posts = posts.len(), "Remote data ready");
                self.users = users;
                self.posts = posts;
                self.status = FetchStatus::Ready;
                Ok(())
            }
            Err(message) => {
                warn!(%message, "Remote fetch failed");
                self.status = FetchStatus::Failed(message.clone());
                Err(Error::Remote(message))
            }
        }
    }

    /// Fetch both collections concurrently and wait for both
    ///
    /// Calling this again after a failure is the retry path.
    pub async fn fetch_all(&mut self, source: &dyn RemoteSource) -> Result<()> {
        self.begin();
        let (users, posts) = futures::join!(source.fetch_users(), source.fetch_posts());
        self.complete(users, posts)
    }
}

/// Combine the two request outcomes
///
/// Succeeds only if both succeeded. When both failed, the users failure is
/// the one reported.
pub fn aggregate(
    users: Result<Vec<User>>,
    posts: Result<Vec<Post>>,
) -> std::result::Result<(Vec<User>, Vec<Post>), String> {
    match (users, posts) {
        (Ok(users), Ok(posts)) => Ok((users, posts)),
        (Err(e), _) | (Ok(_), Err(e)) => Err(format!("Failed to fetch data: {}", describe(&e))),
    }
}

fn describe(error: &Error) -> String {
    match error {
        Error::Remote(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn user(id: u64, name: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "username": "u",
            "email": "u@example.com",
            "phone": "",
            "website": "",
            "company": {"name": "Acme"},
            "address": {"city": "Springfield", "zipcode": "12345"}
        }))
        .unwrap()
    }

    fn post(id: u64, user_id: u64) -> Post {
        Post {
            id,
            user_id,
            title: format!("post {}", id),
            body: "body".into(),
        }
    }

    /// Source with a fixed outcome per collection
    struct StubSource {
        users_ok: bool,
        posts_ok: bool,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(users_ok: bool, posts_ok: bool) -> Self {
            Self {
                users_ok,
                posts_ok,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RemoteSource for StubSource {
        async fn fetch_users(&self) -> Result<Vec<User>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.users_ok {
                Ok(vec![user(1, "Leanne Graham"), user(2, "Ervin Howell")])
            } else {
                Err(Error::Remote("users request failed: HTTP 503 Service Unavailable".into()))
            }
        }

        async fn fetch_posts(&self) -> Result<Vec<Post>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.posts_ok {
                Ok(vec![post(1, 1), post(2, 2), post(3, 1)])
            } else {
                Err(Error::Remote("posts request failed: HTTP 500 Internal Server Error".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_success_stores_both() {
        let mut data = RemoteData::new();
        assert_eq!(data.status(), &FetchStatus::Idle);

        data.fetch_all(&StubSource::new(true, true)).await.unwrap();

        assert_eq!(data.status(), &FetchStatus::Ready);
        assert_eq!(data.users().len(), 2);
        assert_eq!(data.posts().len(), 3);
        assert!(data.error().is_none());
    }

    #[tokio::test]
    async fn test_posts_failure_hides_users() {
        let mut data = RemoteData::new();
        let result = data.fetch_all(&StubSource::new(true, false)).await;

        assert!(matches!(result, Err(Error::Remote(_))));
        assert!(data.users().is_empty());
        assert!(data.posts().is_empty());
        assert!(data.error().unwrap().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_failure_keeps_prior_data_and_retry_recovers() {
        let mut data = RemoteData::new();
        data.fetch_all(&StubSource::new(true, true)).await.unwrap();

        let failing = StubSource::new(false, true);
        assert!(data.fetch_all(&failing).await.is_err());
        assert_eq!(data.users().len(), 2);
        assert_eq!(data.posts().len(), 3);
        assert!(data.error().is_some());
        assert_eq!(failing.calls.load(Ordering::SeqCst), 2);

        data.fetch_all(&StubSource::new(true, true)).await.unwrap();
        assert!(data.error().is_none());
    }

    #[test]
    fn test_begin_clears_error() {
        let mut data = RemoteData::new();
        assert!(data.complete(Ok(vec![]), Err(Error::Remote("boom".into()))).is_err());
        assert_eq!(data.error(), Some("Failed to fetch data: boom"));

        data.begin();
        assert!(data.is_loading());
        assert!(data.error().is_none());
    }

    #[test]
    fn test_both_failures_report_users_first() {
        let message = aggregate(
            Err(Error::Remote("users request failed: timeout".into())),
            Err(Error::Remote("posts request failed: HTTP 500".into())),
        )
        .unwrap_err();
        assert_eq!(message, "Failed to fetch data: users request failed: timeout");
    }
}
