pub mod backends;
pub mod http;
