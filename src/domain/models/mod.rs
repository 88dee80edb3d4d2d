mod chat_backend;
mod conversation;
mod errors;
mod ids;
mod message;
mod timestamp;
mod views;

pub use chat_backend::*;
pub use conversation::*;
pub use errors::*;
pub use ids::*;
pub use message::*;
pub use timestamp::*;
pub use views::*;
