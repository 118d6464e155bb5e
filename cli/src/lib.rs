//! taskwise-cli library - 暴露模块用于集成测试

pub mod commands;
pub mod http;
