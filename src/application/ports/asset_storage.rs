//! Asset Storage Port - 出站端口
//!
//! 定义音频素材落盘的抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{AudioAsset, AudioFileName};

/// 素材存储错误
#[derive(Debug, Error)]
pub enum AssetStorageError {
    #[error("IO error at {path}: {message}")]
    IoError { path: PathBuf, message: String },
}

impl AssetStorageError {
    pub fn io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Asset Storage Port - 出站端口
#[async_trait]
pub trait AssetStoragePort: Send + Sync {
    /// 输出目录
    fn output_dir(&self) -> &Path;

    /// 确保输出目录存在（递归创建，已存在不报错）
    async fn ensure_dir(&self) -> Result<(), AssetStorageError>;

    /// 写入素材（覆盖同名文件），返回落盘后的素材信息
    async fn save_asset(
        &self,
        file_name: &AudioFileName,
        data: &[u8],
    ) -> Result<AudioAsset, AssetStorageError>;
}
