//! File Storage - 文件系统素材存储实现
//!
//! 实现 AssetStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AssetStorageError, AssetStoragePort};
use crate::domain::{AudioAsset, AudioFileName};

/// 文件系统素材存储
pub struct FileAssetStorage {
    /// 输出目录
    base_dir: PathBuf,
}

impl FileAssetStorage {
    /// 创建文件存储（目录在 `ensure_dir` 时才创建）
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 素材路径
    pub fn asset_path(&self, file_name: &AudioFileName) -> PathBuf {
        self.base_dir.join(file_name.as_str())
    }
}

#[async_trait]
impl AssetStoragePort for FileAssetStorage {
    fn output_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn ensure_dir(&self) -> Result<(), AssetStorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| AssetStorageError::io(&self.base_dir, e))
    }

    async fn save_asset(
        &self,
        file_name: &AudioFileName,
        data: &[u8],
    ) -> Result<AudioAsset, AssetStorageError> {
        let path = self.asset_path(file_name);

        fs::write(&path, data)
            .await
            .map_err(|e| AssetStorageError::io(&path, e))?;

        // 以磁盘上的实际大小为准
        let size_bytes = fs::metadata(&path)
            .await
            .map_err(|e| AssetStorageError::io(&path, e))?
            .len();

        tracing::debug!(
            "Saved asset: file={}, size={} bytes",
            file_name,
            size_bytes
        );

        Ok(AudioAsset::new(file_name.clone(), path, size_bytes))
    }
}
