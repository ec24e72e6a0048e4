//! Google Translate TTS Client - 免费的 Google 翻译朗读接口
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 API:
//! GET https://translate.google.com/translate_tts?ie=UTF-8&client=tw-ob&tl=pt-br&q=...
//! Response: audio/mpeg binary
//!
//! 单次请求文本有长度上限，长文本按块请求后按顺序拼接 MP3 数据。

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::map_request_error;
use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::{chunk_text, ChunkConfig, DEFAULT_MAX_CHARS};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Google Translate TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTranslateTtsConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 单次请求最大字符数
    pub max_chunk_chars: usize,
}

impl Default for GoogleTranslateTtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".to_string(),
            timeout_secs: 30,
            max_chunk_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl GoogleTranslateTtsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_chunk_chars(mut self, max_chars: usize) -> Self {
        self.max_chunk_chars = max_chars;
        self
    }
}

/// Google Translate TTS 客户端
pub struct GoogleTranslateTtsClient {
    client: Client,
    config: GoogleTranslateTtsConfig,
}

impl GoogleTranslateTtsClient {
    pub fn new(config: GoogleTranslateTtsConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                TtsError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    /// 请求单个文本块
    async fn fetch_chunk(
        &self,
        chunk: &str,
        idx: usize,
        total: usize,
        request: &SynthesisRequest,
    ) -> Result<Vec<u8>, TtsError> {
        let speed = if request.slow { "0.3" } else { "1" };
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        tracing::debug!(
            url = %self.tts_url(),
            locale = %request.locale,
            idx = %idx,
            total = %total,
            text_len = %textlen,
            "Sending Google TTS request"
        );

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", request.locale.as_str()),
                ("q", chunk),
                ("ttsspeed", speed),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?;

        if audio.is_empty() {
            return Err(TtsError::InvalidResponse(format!(
                "Empty audio for chunk {}/{}",
                idx, total
            )));
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TtsEnginePort for GoogleTranslateTtsClient {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let chunk_config = ChunkConfig {
            max_chars: self.config.max_chunk_chars,
        };
        let chunks = chunk_text(&request.text, &chunk_config);
        if chunks.is_empty() {
            return Err(TtsError::InvalidRequest("Text is empty".to_string()));
        }

        let mut audio_data = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let audio = self.fetch_chunk(chunk, idx, chunks.len(), &request).await?;
            audio_data.extend_from_slice(&audio);
        }

        tracing::info!(
            chunks = chunks.len(),
            audio_size = audio_data.len(),
            "Google TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            request_id: "unknown".to_string(),
            audio_data,
        })
    }
}
