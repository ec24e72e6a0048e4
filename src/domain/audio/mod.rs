//! Audio Context - 音频素材上下文
//!
//! 职责:
//! - 生成请求（文件名 + 文本）
//! - 生成结果（磁盘上的音频素材）
//! - 文件名校验

mod errors;
mod value_objects;

pub use errors::AudioRequestError;
pub use value_objects::{AudioAsset, AudioFileName, AudioRequest};
