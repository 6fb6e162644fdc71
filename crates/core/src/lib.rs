//! Domain logic shared by the database, storage and API crates.
//!
//! Everything in here is pure: no database handles, no HTTP, no filesystem.

pub mod contact;
pub mod error;
pub mod features;
pub mod gate;
pub mod hashing;
pub mod media;
pub mod pagination;
pub mod roles;
pub mod settings;
pub mod storage;
pub mod tags;
pub mod team;
pub mod types;
