//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AssetStorage）
//! - batch: 批量生成用例及报告
//! - error: 单条生成失败原因

pub mod batch;
pub mod error;
pub mod ports;

pub use batch::{BatchGenerator, BatchGeneratorConfig, BatchReport, ItemOutcome};
pub use error::GenerateError;
pub use ports::{
    AssetStorageError, AssetStoragePort, SynthesisRequest, SynthesizedAudio, TtsEnginePort,
    TtsError,
};
