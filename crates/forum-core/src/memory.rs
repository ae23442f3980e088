//! In-memory forum store
//!
//! Implements every repository port over plain collections guarded by a
//! single lock. Uniqueness and reference constraints behave like the
//! PostgreSQL schema, so services can be exercised without a database.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::entities::{
    Comment, CommentView, ItemRef, NewComment, NewPost, NewSubreddit, NewUser, Post, PostView,
    StoredCredentials, Subreddit, User, Vote, VoteCounts,
};
use crate::error::DomainError;
use crate::traits::{
    CommentRepository, PostRepository, RepoResult, SubredditRepository, UserRepository,
    VoteRepository,
};
use crate::value_objects::{ItemType, RecordId, VoteType};

/// In-memory implementation of all repositories
#[derive(Default)]
pub struct InMemoryForum {
    inner: RwLock<ForumState>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct ForumState {
    users: BTreeMap<RecordId, (User, String)>,
    subreddits: BTreeMap<RecordId, Subreddit>,
    posts: BTreeMap<RecordId, Post>,
    comments: BTreeMap<RecordId, Comment>,
    votes: HashMap<(String, ItemRef), Vote>,
    last_id: i64,
}

impl ForumState {
    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId::new(self.last_id)
    }

    fn user_exists(&self, username: &str) -> bool {
        self.users.values().any(|(u, _)| u.username == username)
    }

    fn item_exists(&self, item: ItemRef) -> bool {
        match item.item_type {
            ItemType::Post => self.posts.contains_key(&item.item_id),
            ItemType::Comment => self.comments.contains_key(&item.item_id),
        }
    }

    fn counts(&self, item: ItemRef) -> VoteCounts {
        self.votes
            .values()
            .filter(|v| v.item == item)
            .map(|v| &v.vote_type)
            .collect()
    }

    fn post_view(&self, post: &Post) -> Option<PostView> {
        let subreddit = self.subreddits.get(&post.subreddit_id)?;
        Some(PostView {
            post: post.clone(),
            author_name: post.author.clone(),
            subreddit_name: subreddit.name.clone(),
            subreddit_creator: subreddit.creator.clone(),
            votes: self.counts(ItemRef::post(post.id)),
        })
    }

    fn drop_votes(&mut self, item: ItemRef) {
        self.votes.retain(|(_, voted), _| *voted != item);
    }
}

impl InMemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored vote rows
    pub fn vote_rows(&self) -> usize {
        self.inner.read().votes.len()
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

// Newest first, ties broken by id descending
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, RecordId)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.check_available()?;
        let state = self.inner.read();
        Ok(state
            .users
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn find_credentials(&self, username: &str) -> RepoResult<Option<StoredCredentials>> {
        self.check_available()?;
        let state = self.inner.read();
        Ok(state
            .users
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(u, hash)| StoredCredentials {
                id: u.id,
                username: u.username.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        self.check_available()?;
        let mut state = self.inner.write();
        if state.user_exists(&user.username) {
            return Err(DomainError::UsernameTaken);
        }
        if state.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailTaken);
        }

        let id = state.next_id();
        let created = User::new(id, user.username.clone(), user.email.clone());
        state
            .users
            .insert(id, (created.clone(), password_hash.to_string()));
        Ok(created)
    }
}

// ============================================================================
// Subreddits
// ============================================================================

#[async_trait]
impl SubredditRepository for InMemoryForum {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Subreddit>> {
        self.check_available()?;
        Ok(self.inner.read().subreddits.get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Subreddit>> {
        self.check_available()?;
        let mut subreddits: Vec<Subreddit> = self.inner.read().subreddits.values().cloned().collect();
        newest_first(&mut subreddits, |s| (s.created_at, s.id));
        Ok(subreddits)
    }

    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit> {
        self.check_available()?;
        let mut state = self.inner.write();
        if state.subreddits.values().any(|s| s.name == subreddit.name) {
            return Err(DomainError::SubredditNameTaken);
        }
        if !state.user_exists(&subreddit.creator) {
            return Err(DomainError::InvalidReference("subreddits.creator".to_string()));
        }

        let id = state.next_id();
        let created = Subreddit::new(
            id,
            subreddit.name.clone(),
            subreddit.description.clone(),
            subreddit.creator.clone(),
        );
        state.subreddits.insert(id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// Posts
// ============================================================================

#[async_trait]
impl PostRepository for InMemoryForum {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Post>> {
        self.check_available()?;
        Ok(self.inner.read().posts.get(&id).cloned())
    }

    async fn find_view(&self, id: RecordId) -> RepoResult<Option<PostView>> {
        self.check_available()?;
        let state = self.inner.read();
        Ok(state.posts.get(&id).and_then(|p| state.post_view(p)))
    }

    async fn list(&self, subreddit_id: Option<RecordId>) -> RepoResult<Vec<PostView>> {
        self.check_available()?;
        let state = self.inner.read();
        let mut views: Vec<PostView> = state
            .posts
            .values()
            .filter(|p| subreddit_id.map_or(true, |s| p.belongs_to(s)))
            .filter_map(|p| state.post_view(p))
            .collect();
        newest_first(&mut views, |v| (v.post.created_at, v.post.id));
        Ok(views)
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        self.check_available()?;
        let mut state = self.inner.write();
        if !state.user_exists(&post.author) {
            return Err(DomainError::InvalidReference("posts.author".to_string()));
        }
        if !state.subreddits.contains_key(&post.subreddit_id) {
            return Err(DomainError::InvalidReference("posts.subreddit_id".to_string()));
        }

        let id = state.next_id();
        let created = Post::new(
            id,
            post.title.clone(),
            post.content.clone(),
            post.author.clone(),
            post.subreddit_id,
        );
        state.posts.insert(id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        self.check_available()?;
        let mut state = self.inner.write();
        if state.posts.remove(&id).is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        let comment_ids: Vec<RecordId> = state
            .comments
            .values()
            .filter(|c| c.belongs_to(id))
            .map(|c| c.id)
            .collect();
        for comment_id in comment_ids {
            state.comments.remove(&comment_id);
            state.drop_votes(ItemRef::comment(comment_id));
        }
        state.drop_votes(ItemRef::post(id));
        Ok(())
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for InMemoryForum {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Comment>> {
        self.check_available()?;
        Ok(self.inner.read().comments.get(&id).cloned())
    }

    async fn list_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>> {
        self.check_available()?;
        let state = self.inner.read();
        let mut views: Vec<CommentView> = state
            .comments
            .values()
            .filter(|c| c.belongs_to(post_id))
            .map(|c| CommentView {
                comment: c.clone(),
                author_name: c.author.clone(),
                votes: state.counts(ItemRef::comment(c.id)),
            })
            .collect();
        newest_first(&mut views, |v| (v.comment.created_at, v.comment.id));
        Ok(views)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        self.check_available()?;
        let mut state = self.inner.write();
        if !state.user_exists(&comment.author) {
            return Err(DomainError::InvalidReference("comments.author".to_string()));
        }
        if !state.posts.contains_key(&comment.post_id) {
            return Err(DomainError::InvalidReference("comments.post_id".to_string()));
        }
        if let Some(parent) = comment.parent_id {
            if !state.comments.contains_key(&parent) {
                return Err(DomainError::InvalidReference("comments.parent_id".to_string()));
            }
        }

        let id = state.next_id();
        let created = Comment::new(
            id,
            comment.content.clone(),
            comment.author.clone(),
            comment.post_id,
            comment.parent_id,
        );
        state.comments.insert(id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        self.check_available()?;
        let mut state = self.inner.write();
        if state.comments.remove(&id).is_none() {
            return Err(DomainError::CommentNotFound(id));
        }

        for reply in state.comments.values_mut() {
            if reply.parent_id == Some(id) {
                reply.parent_id = None;
            }
        }
        state.drop_votes(ItemRef::comment(id));
        Ok(())
    }
}

// ============================================================================
// Votes
// ============================================================================

#[async_trait]
impl VoteRepository for InMemoryForum {
    async fn upsert(&self, username: &str, item: ItemRef, vote_type: VoteType) -> RepoResult<()> {
        self.check_available()?;
        let mut state = self.inner.write();
        if !state.item_exists(item) {
            return Err(match item.item_type {
                ItemType::Post => DomainError::PostNotFound(item.item_id),
                ItemType::Comment => DomainError::CommentNotFound(item.item_id),
            });
        }

        state
            .votes
            .entry((username.to_string(), item))
            .and_modify(|vote| vote.change_to(vote_type))
            .or_insert_with(|| Vote::new(username.to_string(), item, vote_type));
        Ok(())
    }

    async fn counts(&self, item: ItemRef) -> RepoResult<VoteCounts> {
        self.check_available()?;
        Ok(self.inner.read().counts(item))
    }

    async fn find(&self, username: &str, item: ItemRef) -> RepoResult<Option<VoteType>> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .votes
            .get(&(username.to_string(), item))
            .map(|v| v.vote_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryForum, Subreddit, Post) {
        let store = InMemoryForum::new();
        UserRepository::create(&store, &NewUser::new("alice", "alice@example.com"), "hash")
            .await
            .unwrap();
        let sub = SubredditRepository::create(&store, &NewSubreddit::new("golang", "desc", "alice"))
            .await
            .unwrap();
        let post = PostRepository::create(&store, &NewPost::new("hi", "body", "alice", sub.id))
            .await
            .unwrap();
        (store, sub, post)
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let store = InMemoryForum::new();
        let first = NewUser::new("alice", "alice@example.com");
        UserRepository::create(&store, &first, "h1").await.unwrap();

        let same_name = NewUser::new("alice", "other@example.com");
        assert!(matches!(
            UserRepository::create(&store, &same_name, "h2").await,
            Err(DomainError::UsernameTaken)
        ));

        let same_email = NewUser::new("carol", "alice@example.com");
        assert!(matches!(
            UserRepository::create(&store, &same_email, "h3").await,
            Err(DomainError::EmailTaken)
        ));

        let creds = store.find_credentials("alice").await.unwrap().unwrap();
        assert_eq!(creds.password_hash, "h1");
    }

    #[tokio::test]
    async fn test_post_requires_existing_author_and_subreddit() {
        let (store, sub, _) = seeded().await;

        let ghost = NewPost::new("t", "c", "ghost", sub.id);
        assert!(matches!(
            PostRepository::create(&store, &ghost).await,
            Err(DomainError::InvalidReference(_))
        ));

        let nowhere = NewPost::new("t", "c", "alice", RecordId::new(999));
        assert!(matches!(
            PostRepository::create(&store, &nowhere).await,
            Err(DomainError::InvalidReference(_))
        ));
    }

    #[tokio::test]
    async fn test_vote_upsert_replaces() {
        let (store, _, post) = seeded().await;
        let item = ItemRef::post(post.id);

        store.upsert("bob", item, VoteType::Up).await.unwrap();
        store.upsert("bob", item, VoteType::Up).await.unwrap();
        assert_eq!(store.counts(item).await.unwrap(), VoteCounts::new(1, 0));

        store.upsert("bob", item, VoteType::Down).await.unwrap();
        assert_eq!(store.counts(item).await.unwrap(), VoteCounts::new(0, 1));
        assert_eq!(store.vote_rows(), 1);
        assert_eq!(store.find("bob", item).await.unwrap(), Some(VoteType::Down));
    }

    #[tokio::test]
    async fn test_vote_on_missing_item() {
        let store = InMemoryForum::new();
        let result = store
            .upsert("bob", ItemRef::comment(RecordId::new(7)), VoteType::Up)
            .await;
        assert!(matches!(result, Err(DomainError::CommentNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_post_cascades() {
        let (store, _, post) = seeded().await;
        let comment = CommentRepository::create(
            &store,
            &NewComment::new("nice", "alice", post.id, None),
        )
        .await
        .unwrap();
        store.upsert("bob", ItemRef::post(post.id), VoteType::Up).await.unwrap();
        store
            .upsert("bob", ItemRef::comment(comment.id), VoteType::Down)
            .await
            .unwrap();

        PostRepository::delete(&store, post.id).await.unwrap();

        assert!(CommentRepository::find_by_id(&store, comment.id)
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.vote_rows(), 0);
        assert!(matches!(
            PostRepository::delete(&store, post.id).await,
            Err(DomainError::PostNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_comment_detaches_replies() {
        let (store, _, post) = seeded().await;
        let parent = CommentRepository::create(&store, &NewComment::new("a", "alice", post.id, None))
            .await
            .unwrap();
        let reply = CommentRepository::create(
            &store,
            &NewComment::new("b", "alice", post.id, Some(parent.id)),
        )
        .await
        .unwrap();

        CommentRepository::delete(&store, parent.id).await.unwrap();

        let reply = CommentRepository::find_by_id(&store, reply.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.parent_id, None);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let (store, _, _) = seeded().await;
        store.set_unavailable(true);
        let err = SubredditRepository::list(&store).await.unwrap_err();
        assert!(err.is_connection());

        store.set_unavailable(false);
        assert_eq!(SubredditRepository::list(&store).await.unwrap().len(), 1);
    }
}
