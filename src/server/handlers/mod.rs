pub mod chat;
pub mod health;
pub mod sessions;
pub mod ui;
