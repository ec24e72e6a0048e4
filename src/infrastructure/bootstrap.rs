//! Bootstrap - 按配置组装 TTS 客户端和批量生成器
//!
//! TTS 客户端创建失败（HTTP 客户端初始化失败、缺少 API Key 等）视为致命错误，
//! 由调用方在发起任何请求之前终止。

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TtsEnginePort, TtsError};
use crate::application::{BatchGenerator, BatchGeneratorConfig};
use crate::config::{AppConfig, TtsConfig, TtsProvider};
use crate::infrastructure::adapters::{
    ElevenLabsTtsClient, ElevenLabsTtsConfig, FakeTtsClient, FileAssetStorage,
    GoogleTranslateTtsClient, GoogleTranslateTtsConfig,
};

/// 创建配置指定的 TTS 客户端
pub fn build_tts_engine(config: &TtsConfig) -> Result<Arc<dyn TtsEnginePort>, TtsError> {
    let engine: Arc<dyn TtsEnginePort> = match config.provider {
        TtsProvider::Google => {
            let google_config = GoogleTranslateTtsConfig::new(&config.google.base_url)
                .with_timeout(config.timeout_secs)
                .with_max_chunk_chars(config.google.max_chunk_chars);
            Arc::new(GoogleTranslateTtsClient::new(google_config)?)
        }
        TtsProvider::ElevenLabs => {
            let elevenlabs_config = ElevenLabsTtsConfig {
                base_url: config.elevenlabs.base_url.clone(),
                api_key: config.elevenlabs.api_key.clone(),
                voice_id: config.elevenlabs.voice_id.clone(),
                model_id: config.elevenlabs.model_id.clone(),
                timeout_secs: config.timeout_secs,
            };
            Arc::new(ElevenLabsTtsClient::new(elevenlabs_config)?)
        }
        TtsProvider::Fake => Arc::new(FakeTtsClient::with_defaults()),
    };

    tracing::info!(provider = engine.name(), "TTS engine ready");
    Ok(engine)
}

/// 生成器配置
pub fn generator_config(config: &AppConfig) -> BatchGeneratorConfig {
    BatchGeneratorConfig {
        locale: config.tts.locale.clone(),
        slow: config.tts.slow,
        request_delay: Duration::from_millis(config.generator.request_delay_ms),
    }
}

/// 组装批量生成器
pub fn build_generator(config: &AppConfig) -> Result<BatchGenerator, TtsError> {
    let tts_engine = build_tts_engine(&config.tts)?;
    let storage = Arc::new(FileAssetStorage::new(config.output.resolve_dir()));

    Ok(BatchGenerator::new(
        generator_config(config),
        tts_engine,
        storage,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_google_engine() {
        let engine = build_tts_engine(&TtsConfig::default()).unwrap();
        assert_eq!(engine.name(), "google");
    }

    #[test]
    fn test_build_fake_engine() {
        let config = TtsConfig {
            provider: TtsProvider::Fake,
            ..Default::default()
        };
        assert_eq!(build_tts_engine(&config).unwrap().name(), "fake");
    }

    #[test]
    fn test_build_elevenlabs_engine_with_key() {
        let mut config = TtsConfig {
            provider: TtsProvider::ElevenLabs,
            ..Default::default()
        };
        config.elevenlabs.api_key = Some("test-key".to_string());
        assert_eq!(build_tts_engine(&config).unwrap().name(), "elevenlabs");
    }

    #[test]
    fn test_generator_config_from_app_config() {
        let mut config = AppConfig::default();
        config.tts.slow = true;
        config.generator.request_delay_ms = 0;

        let generator_config = generator_config(&config);
        assert_eq!(generator_config.locale, "pt-br");
        assert!(generator_config.slow);
        assert!(generator_config.request_delay.is_zero());
    }
}
