//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及按配置组装的入口

pub mod adapters;
pub mod bootstrap;

pub use bootstrap::{build_generator, build_tts_engine, generator_config};
