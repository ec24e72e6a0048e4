//! ElevenLabs TTS Client - 付费的 ElevenLabs 语音合成
//!
//! 外部 API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Headers: xi-api-key, Accept: audio/mpeg
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary, `request-id` header

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::map_request_error;
use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};

/// API Key 的环境变量回退
pub const ELEVENLABS_API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    style: f64,
    use_speaker_boost: bool,
    speed: f64,
}

impl VoiceSettings {
    fn for_speed(slow: bool) -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
            // 服务端允许的最低语速
            speed: if slow { 0.7 } else { 1.0 },
        }
    }
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsTtsConfig {
    pub base_url: String,
    /// 未配置时读取 `ELEVENLABS_API_KEY`
    pub api_key: Option<String>,
    pub voice_id: String,
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsTtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            api_key: None,
            voice_id: "eVXYtPVYB9wDoz9NVTIy".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            timeout_secs: 30,
        }
    }
}

/// 解析 API Key：配置优先，其次环境变量，空字符串视为未设置
fn resolve_api_key(
    configured: Option<&str>,
    from_env: Option<String>,
) -> Result<String, TtsError> {
    configured
        .map(str::to_string)
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_env.filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            TtsError::ConfigurationError(format!(
                "ElevenLabs API key missing: set tts.elevenlabs.api_key or {}",
                ELEVENLABS_API_KEY_ENV
            ))
        })
}

/// ElevenLabs 客户端
pub struct ElevenLabsTtsClient {
    client: Client,
    config: ElevenLabsTtsConfig,
    api_key: String,
}

impl ElevenLabsTtsClient {
    pub fn new(config: ElevenLabsTtsConfig) -> Result<Self, TtsError> {
        let api_key = resolve_api_key(
            config.api_key.as_deref(),
            std::env::var(ELEVENLABS_API_KEY_ENV).ok(),
        )?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                TtsError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn synthesize_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        )
    }
}

#[async_trait]
impl TtsEnginePort for ElevenLabsTtsClient {
    fn name(&self) -> &'static str {
        "elevenlabs"
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        if request.text.trim().is_empty() {
            return Err(TtsError::InvalidRequest("Text is empty".to_string()));
        }

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings::for_speed(request.slow),
        };

        // multilingual 模型根据文本自动识别语言，locale 仅用于日志
        tracing::debug!(
            url = %self.synthesize_url(),
            voice_id = %self.config.voice_id,
            locale = %request.locale,
            text_len = request.text.len(),
            "Sending ElevenLabs request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "ElevenLabs API error {}: {}",
                status, error_text
            )));
        }

        let request_id = response
            .headers()
            .get("request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio".to_string()));
        }

        tracing::info!(
            request_id = %request_id,
            audio_size = audio_data.len(),
            "ElevenLabs synthesis completed"
        );

        Ok(SynthesizedAudio {
            request_id,
            audio_data,
        })
    }
}
