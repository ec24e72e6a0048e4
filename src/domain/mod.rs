//! Domain Layer - 领域层
//!
//! - Audio Context: 生成请求与音频素材
//! - 免费版提示音文案表
//! - 文本切块器（供有长度上限的 TTS 服务使用）

pub mod audio;
pub mod messages;

mod text_chunker;

pub use audio::{AudioAsset, AudioFileName, AudioRequest, AudioRequestError};
pub use messages::{free_tier_requests, FREE_TIER_MESSAGES};
pub use text_chunker::{chunk_text, ChunkConfig, DEFAULT_MAX_CHARS};
