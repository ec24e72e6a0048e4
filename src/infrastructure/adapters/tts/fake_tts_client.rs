//! Fake TTS Client - 离线 TTS 客户端
//!
//! 始终返回固定的音频数据，不实际调用 TTS 服务；可配置部分文本固定失败。
//! 用于测试和不联网的演练。

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 这些文本的请求返回服务错误
    pub failing_texts: HashSet<String>,
    /// 模拟延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            // MPEG-1 Layer III 帧头 + 填充
            audio_data: [&[0xFF, 0xFB, 0x90, 0x64][..], &[0u8; 412][..]].concat(),
            failing_texts: HashSet::new(),
            latency_ms: 50,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    /// 收到的请求（按顺序）
    received: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::info!(
            audio_size = config.audio_data.len(),
            failing = config.failing_texts.len(),
            "FakeTtsClient initialized"
        );
        Self {
            config,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 已收到的请求数
    pub fn calls(&self) -> usize {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            locale = %request.locale,
            "FakeTtsClient: returning fixed audio"
        );

        let should_fail = self.config.failing_texts.contains(&request.text);
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if should_fail {
            return Err(TtsError::ServiceError("HTTP 500: simulated failure".to_string()));
        }

        Ok(SynthesizedAudio {
            request_id: format!("fake-{}", uuid::Uuid::new_v4()),
            audio_data: self.config.audio_data.clone(),
        })
    }
}
