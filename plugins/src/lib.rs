pub mod completion;
pub mod factory;
