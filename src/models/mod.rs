//! Domain models and request/response DTOs

pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod user;
