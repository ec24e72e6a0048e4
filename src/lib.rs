//! Runinhas Audio - 免费版提示音生成器
//!
//! 通过 TTS 服务把固定的葡萄牙语提示文案合成为 MP3，写入后端素材目录，
//! 之后由后端构建流程嵌入二进制。
//!
//! 领域层 (domain/):
//! - Audio Context: 生成请求、音频素材
//! - 文案表、文本切块器
//!
//! 应用层 (application/):
//! - Ports: TtsEngine, AssetStorage
//! - Batch: 批量生成器及报告
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Google / ElevenLabs / Fake TTS 客户端，文件存储
//! - Bootstrap: 按配置组装

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
