//! TTS Adapter - 语音合成客户端实现

mod elevenlabs_client;
mod fake_tts_client;
mod google_translate_client;

pub use elevenlabs_client::{ElevenLabsTtsClient, ElevenLabsTtsConfig, ELEVENLABS_API_KEY_ENV};
pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use google_translate_client::{GoogleTranslateTtsClient, GoogleTranslateTtsConfig};

use crate::application::ports::TtsError;

/// 发送请求失败时的错误归类
fn map_request_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}
