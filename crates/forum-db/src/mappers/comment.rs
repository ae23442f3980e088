//! Comment model -> entity mappers

use forum_core::entities::{Comment, CommentView};
use forum_core::value_objects::RecordId;

use crate::models::{CommentModel, CommentViewModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: RecordId::new(model.id),
            content: model.content,
            author: model.author,
            post_id: RecordId::new(model.post_id),
            parent_id: model.parent_id.map(RecordId::new),
            created_at: model.created_at,
        }
    }
}

impl From<CommentViewModel> for CommentView {
    fn from(model: CommentViewModel) -> Self {
        CommentView {
            comment: Comment::from(model.comment),
            author_name: model.author_name,
            votes: super::vote::counts(model.upvotes, model.downvotes),
        }
    }
}
