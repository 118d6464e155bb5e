pub mod api;
pub mod completion;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod prompt;
