//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（audiogen.toml）
//! 3. 默认值
//!
//! 文案表是固定的，不从任何配置来源读取。

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, TtsProvider};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["audiogen", "audiogen.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "RUNINHAS";

/// 加载应用配置
///
/// # 环境变量示例
/// - `RUNINHAS_TTS__PROVIDER=elevenlabs`
/// - `RUNINHAS_TTS__ELEVENLABS__API_KEY=...`
/// - `RUNINHAS_OUTPUT__DIR=/tmp/audio`
/// - `RUNINHAS_GENERATOR__REQUEST_DELAY_MS=0`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("tts.provider", "google")?
        .set_default("tts.locale", "pt-br")?
        .set_default("tts.slow", false)?
        .set_default("tts.timeout_secs", 30)?
        .set_default("tts.google.base_url", "https://translate.google.com")?
        .set_default("tts.google.max_chunk_chars", 100)?
        .set_default("tts.elevenlabs.base_url", "https://api.elevenlabs.io")?
        .set_default("tts.elevenlabs.voice_id", "eVXYtPVYB9wDoz9NVTIy")?
        .set_default("tts.elevenlabs.model_id", "eleven_multilingual_v2")?
        .set_default("generator.request_delay_ms", 500)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: RUNINHAS_TTS__PROVIDER=fake
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tts.locale.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS locale cannot be empty".to_string(),
        ));
    }

    if config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "TTS timeout cannot be 0".to_string(),
        ));
    }

    match config.tts.provider {
        TtsProvider::Google => {
            if config.tts.google.base_url.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Google TTS URL cannot be empty".to_string(),
                ));
            }
            if config.tts.google.max_chunk_chars == 0 {
                return Err(ConfigError::ValidationError(
                    "Google TTS chunk size cannot be 0".to_string(),
                ));
            }
        }
        TtsProvider::ElevenLabs => {
            let elevenlabs = &config.tts.elevenlabs;
            if elevenlabs.base_url.is_empty()
                || elevenlabs.voice_id.is_empty()
                || elevenlabs.model_id.is_empty()
            {
                return Err(ConfigError::ValidationError(
                    "ElevenLabs URL, voice_id and model_id are required".to_string(),
                ));
            }
        }
        TtsProvider::Fake => {}
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Audio Generator Configuration ===");
    tracing::info!("TTS Provider: {}", config.tts.provider);
    tracing::info!("TTS Locale: {}", config.tts.locale);
    tracing::info!("TTS Slow: {}", config.tts.slow);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    match config.tts.provider {
        TtsProvider::Google => {
            tracing::info!("Google URL: {}", config.tts.google.base_url);
            tracing::info!("Google Chunk Size: {}", config.tts.google.max_chunk_chars);
        }
        TtsProvider::ElevenLabs => {
            tracing::info!("ElevenLabs URL: {}", config.tts.elevenlabs.base_url);
            tracing::info!("ElevenLabs Voice: {}", config.tts.elevenlabs.voice_id);
            tracing::info!("ElevenLabs Model: {}", config.tts.elevenlabs.model_id);
            tracing::info!(
                "ElevenLabs API Key: {}",
                if config.tts.elevenlabs.api_key.is_some() {
                    "configured"
                } else {
                    "from environment"
                }
            );
        }
        TtsProvider::Fake => {}
    }
    tracing::info!("Output Directory: {:?}", config.output.resolve_dir());
    tracing::info!("Request Delay: {}ms", config.generator.request_delay_ms);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=====================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_locale() {
        let mut config = AppConfig::default();
        config.tts.locale = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.tts.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_chunk_size() {
        let mut config = AppConfig::default();
        config.tts.google.max_chunk_chars = 0;
        assert!(validate_config(&config).is_err());

        // 其他 provider 不关心 Google 配置
        config.tts.provider = TtsProvider::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_voice_id() {
        let mut config = AppConfig::default();
        config.tts.provider = TtsProvider::ElevenLabs;
        config.tts.elevenlabs.voice_id = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[tts]
provider = "elevenlabs"
slow = true

[tts.elevenlabs]
voice_id = "voice-42"

[output]
dir = "/tmp/runinhas-audio"

[generator]
request_delay_ms = 0
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.tts.provider, TtsProvider::ElevenLabs);
        assert!(config.tts.slow);
        assert_eq!(config.tts.elevenlabs.voice_id, "voice-42");
        assert_eq!(config.tts.elevenlabs.model_id, "eleven_multilingual_v2");
        assert_eq!(config.tts.locale, "pt-br");
        assert_eq!(
            config.output.resolve_dir(),
            std::path::PathBuf::from("/tmp/runinhas-audio")
        );
        assert_eq!(config.generator.request_delay_ms, 0);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[tts]\nprovider = \"espeak\"").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
