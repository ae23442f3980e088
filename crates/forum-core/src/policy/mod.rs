//! Authorization policy

mod authorization;

pub use authorization::{authorize_moderation, ensure_moderator, Decision};
