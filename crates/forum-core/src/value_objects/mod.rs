//! Value objects - immutable types that represent domain concepts

mod record_id;
mod vote_type;

pub use record_id::{RecordId, RecordIdParseError};
pub use vote_type::{ItemType, VoteType};
