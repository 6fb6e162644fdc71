//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod feature_repo;
pub mod message_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod session_repo;
pub mod setting_repo;
pub mod team_member_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use feature_repo::FeatureRepo;
pub use message_repo::MessageRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use setting_repo::SettingRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
