pub mod auth;
pub mod categories;
pub mod features;
pub mod gate;
pub mod messages;
pub mod projects;
pub mod settings;
pub mod team;
pub mod uploads;
