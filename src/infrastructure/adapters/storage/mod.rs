//! Storage Adapter - 文件系统素材存储

mod file_storage;

pub use file_storage::FileAssetStorage;
