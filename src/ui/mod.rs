pub mod builtin_themes;
pub mod chat_loop;
pub mod message_list;
pub mod renderer;
pub mod theme;
