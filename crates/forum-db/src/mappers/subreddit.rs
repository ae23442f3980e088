//! Subreddit model -> entity mapper

use forum_core::entities::Subreddit;
use forum_core::value_objects::RecordId;

use crate::models::SubredditModel;

impl From<SubredditModel> for Subreddit {
    fn from(model: SubredditModel) -> Self {
        Subreddit {
            id: RecordId::new(model.id),
            name: model.name,
            description: model.description,
            creator: model.creator,
            created_at: model.created_at,
        }
    }
}
