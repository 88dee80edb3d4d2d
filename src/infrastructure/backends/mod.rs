mod chat_manager;

pub use chat_manager::*;
