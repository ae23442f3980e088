//! Post model -> entity mappers

use forum_core::entities::{Post, PostView};
use forum_core::value_objects::RecordId;

use crate::models::{PostModel, PostViewModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: RecordId::new(model.id),
            title: model.title,
            content: model.content,
            author: model.author,
            subreddit_id: RecordId::new(model.subreddit_id),
            created_at: model.created_at,
        }
    }
}

impl From<PostViewModel> for PostView {
    fn from(model: PostViewModel) -> Self {
        PostView {
            post: Post::from(model.post),
            author_name: model.author_name,
            subreddit_name: model.subreddit_name,
            subreddit_creator: model.subreddit_creator,
            votes: super::vote::counts(model.upvotes, model.downvotes),
        }
    }
}
