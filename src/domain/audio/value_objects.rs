//! Audio Context - Value Objects

use std::path::PathBuf;

use super::AudioRequestError;

/// 音频文件名
///
/// 不变量:
/// - 非空
/// - 不包含路径分隔符，也不是 `.` / `..`（素材只能落在输出目录内）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioFileName(String);

impl AudioFileName {
    pub fn new(name: impl Into<String>) -> Result<Self, AudioRequestError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AudioRequestError::EmptyFileName);
        }
        if name == "." || name == ".." || name.contains(&['/', '\\'][..]) {
            return Err(AudioRequestError::InvalidFileName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成请求：输出文件名 + 朗读文本
///
/// 文件名在处理时才校验，单条请求无效不影响整个批次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    filename: String,
    text: String,
}

impl AudioRequest {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 校验请求，返回合法的文件名
    pub fn validate(&self) -> Result<AudioFileName, AudioRequestError> {
        let file_name = AudioFileName::new(self.filename.as_str())?;
        if self.text.trim().is_empty() {
            return Err(AudioRequestError::EmptyText(self.filename.clone()));
        }
        Ok(file_name)
    }
}

/// 已生成的音频素材
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    file_name: AudioFileName,
    path: PathBuf,
    size_bytes: u64,
}

impl AudioAsset {
    pub fn new(file_name: AudioFileName, path: PathBuf, size_bytes: u64) -> Self {
        Self {
            file_name,
            path,
            size_bytes,
        }
    }

    pub fn file_name(&self) -> &AudioFileName {
        &self.file_name
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// 文件大小（KB）
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}
