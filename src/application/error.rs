//! 应用层错误定义
//!
//! 单条生成任务的失败原因

use thiserror::Error;

use crate::application::ports::{AssetStorageError, TtsError};
use crate::domain::AudioRequestError;

/// 单条生成失败
#[derive(Debug, Error)]
pub enum GenerateError {
    /// 请求无效（文件名或文本）
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] AudioRequestError),

    /// 语音合成失败
    #[error("Synthesis failed: {0}")]
    Tts(#[from] TtsError),

    /// 写入失败
    #[error("Storage failed: {0}")]
    Storage(#[from] AssetStorageError),
}
