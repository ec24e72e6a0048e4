//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 批量生成配置
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// TTS 服务提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// Google 翻译朗读（免费）
    #[default]
    Google,
    /// ElevenLabs（需要 API Key）
    ElevenLabs,
    /// 离线固定音频
    Fake,
}

impl std::fmt::Display for TtsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Google => "google",
            Self::ElevenLabs => "elevenlabs",
            Self::Fake => "fake",
        };
        write!(f, "{}", name)
    }
}

/// TTS 配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub provider: TtsProvider,

    /// 语言/地区代码
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 是否慢速朗读
    #[serde(default)]
    pub slow: bool,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub google: GoogleTtsConfig,

    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
}

fn default_locale() -> String {
    "pt-br".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            locale: default_locale(),
            slow: false,
            timeout_secs: default_tts_timeout(),
            google: GoogleTtsConfig::default(),
            elevenlabs: ElevenLabsConfig::default(),
        }
    }
}

/// Google 翻译朗读配置
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTtsConfig {
    #[serde(default = "default_google_url")]
    pub base_url: String,

    /// 单次请求最大字符数
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_google_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_max_chunk_chars() -> usize {
    100
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_url(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

/// ElevenLabs 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsConfig {
    #[serde(default = "default_elevenlabs_url")]
    pub base_url: String,

    /// API Key，未设置时读取 `ELEVENLABS_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,
}

fn default_elevenlabs_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    "eVXYtPVYB9wDoz9NVTIy".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            base_url: default_elevenlabs_url(),
            api_key: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// 输出目录，未设置时使用 `default_output_dir()`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl OutputConfig {
    /// 实际使用的输出目录
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_output_dir)
    }
}

/// 默认输出目录：本 crate 所在目录的上一级 + `backend/assets/audio`
///
/// crate 位于 `<repo>/scripts`，素材目录是 `<repo>/backend/assets/audio`。
pub fn default_output_dir() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .unwrap_or(crate_dir)
        .join("backend")
        .join("assets")
        .join("audio")
}

/// 批量生成配置
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// 相邻请求间隔（毫秒）
    #[serde(default = "default_request_delay")]
    pub request_delay_ms: u64,
}

fn default_request_delay() -> u64 {
    500
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tts.provider, TtsProvider::Google);
        assert_eq!(config.tts.locale, "pt-br");
        assert!(!config.tts.slow);
        assert_eq!(config.tts.timeout_secs, 30);
        assert_eq!(config.tts.google.max_chunk_chars, 100);
        assert_eq!(config.tts.elevenlabs.model_id, "eleven_multilingual_v2");
        assert!(config.tts.elevenlabs.api_key.is_none());
        assert_eq!(config.generator.request_delay_ms, 500);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_default_output_dir() {
        let dir = default_output_dir();
        assert!(dir.ends_with("backend/assets/audio"));
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(dir.parent().and_then(Path::parent).and_then(Path::parent), crate_dir.parent());
    }

    #[test]
    fn test_output_dir_override() {
        let config = OutputConfig {
            dir: Some(PathBuf::from("/tmp/audio")),
        };
        assert_eq!(config.resolve_dir(), PathBuf::from("/tmp/audio"));
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(TtsProvider::ElevenLabs.to_string(), "elevenlabs");
        assert_eq!(TtsProvider::Fake.to_string(), "fake");
    }
}
