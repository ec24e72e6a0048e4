//! TTS Engine Port - 语音合成服务抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 语言/地区代码（如 `pt-br`）
    pub locale: String,
    /// 是否慢速朗读
    pub slow: bool,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, locale: impl Into<String>, slow: bool) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
            slow,
        }
    }
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 服务端请求 ID（用于追踪，服务端未提供时为 "unknown"）
    pub request_id: String,
    /// 压缩音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 服务名称（用于日志）
    fn name(&self) -> &'static str;

    /// 执行语音合成
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError>;
}
