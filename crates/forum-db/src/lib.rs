//! # forum-db
//!
//! Database layer implementing the `forum-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations (credential store, content repository,
//!   vote ledger and the listing queries)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::{create_pool, DatabaseConfig, PgPostRepository};
//! use forum_core::traits::PostRepository;
//!
//! async fn example(settings: &forum_common::DatabaseSettings) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(settings)).await?;
//!     let posts = PgPostRepository::new(pool).list(None).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, default_migrations_dir, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgSubredditRepository, PgUserRepository,
    PgVoteRepository,
};
