//! Audio Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioRequestError {
    #[error("文件名不能为空")]
    EmptyFileName,

    #[error("无效的文件名: {0}")]
    InvalidFileName(String),

    #[error("文本不能为空: {0}")]
    EmptyText(String),
}
