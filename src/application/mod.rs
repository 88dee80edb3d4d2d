pub mod cli;
pub mod loaders;
pub mod render;
