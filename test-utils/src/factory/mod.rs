//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories never
//! create parent rows on their own; pass the ids of rows created beforehand.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let coach = factory::create_coach(&db).await?;
//! let player = factory::create_player(&db).await?;
//! let session = factory::create_session(&db, coach.id, &[player.id]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .username("asha")
//!     .password("secret")
//!     .academy_level("Advanced")
//!     .build()
//!     .await?;
//! ```

pub mod admin;
pub mod coach;
pub mod evaluation;
pub mod helpers;
pub mod notification;
pub mod performance;
pub mod player;
pub mod session;

pub use admin::create_admin;
pub use coach::create_coach;
pub use evaluation::create_evaluation;
pub use notification::create_notification;
pub use performance::create_performance;
pub use player::create_player;
pub use session::create_session;
