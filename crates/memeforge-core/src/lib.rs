pub mod error;
pub mod consts;
pub mod config;
pub mod wire;
pub mod client;
pub mod generation;
pub mod text;
