pub mod app;
pub mod config;
pub mod constants;
pub mod message;
pub mod replies;
pub mod reply_scheduler;
pub mod store;
pub mod text_wrapping;
