//! Batch Generator - 批量生成提示音
//!
//! 对每条请求：合成 → 落盘 → 记录大小。单条失败只记录，不中断批次。

use std::sync::Arc;
use std::time::Duration;

use crate::application::batch::{BatchReport, ItemOutcome};
use crate::application::error::GenerateError;
use crate::application::ports::{
    AssetStorageError, AssetStoragePort, SynthesisRequest, TtsEnginePort,
};
use crate::domain::{AudioAsset, AudioRequest};

/// Generator 配置
#[derive(Debug, Clone)]
pub struct BatchGeneratorConfig {
    /// 语言/地区代码
    pub locale: String,
    /// 是否慢速朗读
    pub slow: bool,
    /// 相邻两次请求之间的间隔，避免压垮服务端
    pub request_delay: Duration,
}

impl Default for BatchGeneratorConfig {
    fn default() -> Self {
        Self {
            locale: "pt-br".to_string(),
            slow: false,
            request_delay: Duration::from_millis(500),
        }
    }
}

/// 批量生成器
pub struct BatchGenerator {
    config: BatchGeneratorConfig,
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AssetStoragePort>,
}

impl BatchGenerator {
    pub fn new(
        config: BatchGeneratorConfig,
        tts_engine: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn AssetStoragePort>,
    ) -> Self {
        Self {
            config,
            tts_engine,
            storage,
        }
    }

    /// 顺序处理所有请求
    ///
    /// 只有输出目录无法创建时返回错误（此时不会发起任何合成请求）；
    /// 单条请求的失败记录在报告中。
    pub async fn run(&self, requests: &[AudioRequest]) -> Result<BatchReport, AssetStorageError> {
        self.storage.ensure_dir().await?;

        tracing::info!(
            dir = %self.storage.output_dir().display(),
            provider = self.tts_engine.name(),
            locale = %self.config.locale,
            total = requests.len(),
            "Generating audio assets"
        );

        let mut report = BatchReport::new(self.storage.output_dir());

        for (index, request) in requests.iter().enumerate() {
            if index > 0 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            let outcome = match self.generate_one(request).await {
                Ok(asset) => {
                    tracing::info!(
                        filename = %asset.file_name(),
                        size_bytes = asset.size_bytes(),
                        "Audio asset generated"
                    );
                    ItemOutcome::Generated(asset)
                }
                Err(error) => {
                    tracing::error!(
                        filename = %request.filename(),
                        error = %error,
                        "Failed to generate audio asset"
                    );
                    ItemOutcome::Failed {
                        filename: request.filename().to_string(),
                        error,
                    }
                }
            };
            report.push(outcome);
        }

        tracing::info!(
            success = report.success_count(),
            total = report.total(),
            total_bytes = report.total_bytes(),
            "Batch finished"
        );

        Ok(report)
    }

    async fn generate_one(&self, request: &AudioRequest) -> Result<AudioAsset, GenerateError> {
        let file_name = request.validate()?;

        let synthesis = SynthesisRequest::new(request.text(), &self.config.locale, self.config.slow);
        let audio = self.tts_engine.synthesize(synthesis).await?;

        tracing::debug!(
            filename = %file_name,
            request_id = %audio.request_id,
            audio_size = audio.audio_data.len(),
            "Synthesis completed, writing asset"
        );

        let asset = self.storage.save_asset(&file_name, &audio.audio_data).await?;
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TtsError;
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig, FileAssetStorage};
    use tempfile::tempdir;

    fn no_delay() -> BatchGeneratorConfig {
        BatchGeneratorConfig {
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    fn fake_engine(audio: &[u8], failing: &[&str]) -> Arc<FakeTtsClient> {
        Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            audio_data: audio.to_vec(),
            failing_texts: failing.iter().map(|t| t.to_string()).collect(),
            latency_ms: 0,
        }))
    }

    #[tokio::test]
    async fn test_single_request_generates_asset() {
        let temp_dir = tempdir().unwrap();
        let engine = fake_engine(&[7u8; 3200], &[]);
        let storage = Arc::new(FileAssetStorage::new(temp_dir.path()));
        let generator = BatchGenerator::new(no_delay(), engine.clone(), storage);

        let report = generator
            .run(&[AudioRequest::new("a.mp3", "hello")])
            .await
            .unwrap();

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.total(), 1);
        let path = temp_dir.path().join("a.mp3");
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 3200);
        assert!(report.to_string().contains("(3.1 KB)"));
        assert_eq!(engine.calls(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_batch() {
        let temp_dir = tempdir().unwrap();
        let engine = fake_engine(b"ID3 fake mp3", &["dois"]);
        let storage = Arc::new(FileAssetStorage::new(temp_dir.path()));
        let generator = BatchGenerator::new(no_delay(), engine.clone(), storage);

        let requests = vec![
            AudioRequest::new("um.mp3", "um"),
            AudioRequest::new("dois.mp3", "dois"),
            AudioRequest::new("tres.mp3", "tres"),
        ];
        let report = generator.run(&requests).await.unwrap();

        assert_eq!(engine.calls(), 3);
        assert_eq!(report.success_count(), requests.len() - 1);
        assert!(temp_dir.path().join("um.mp3").exists());
        assert!(!temp_dir.path().join("dois.mp3").exists());
        assert!(temp_dir.path().join("tres.mp3").exists());

        match &report.outcomes()[1] {
            ItemOutcome::Failed { filename, error } => {
                assert_eq!(filename, "dois.mp3");
                assert!(matches!(error, GenerateError::Tts(TtsError::ServiceError(_))));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_file_name_skips_synthesis() {
        let temp_dir = tempdir().unwrap();
        let engine = fake_engine(b"audio", &[]);
        let storage = Arc::new(FileAssetStorage::new(temp_dir.path()));
        let generator = BatchGenerator::new(no_delay(), engine.clone(), storage);

        let requests = vec![
            AudioRequest::new("../escape.mp3", "fora"),
            AudioRequest::new("ok.mp3", "dentro"),
        ];
        let report = generator.run(&requests).await.unwrap();

        assert_eq!(report.success_count(), 1);
        assert_eq!(engine.calls(), 1);
        assert!(matches!(
            report.outcomes()[0],
            ItemOutcome::Failed {
                error: GenerateError::InvalidRequest(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_output_dir_is_created() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("backend").join("assets").join("audio");
        let engine = fake_engine(b"audio", &[]);
        let storage = Arc::new(FileAssetStorage::new(&output_dir));
        let generator = BatchGenerator::new(no_delay(), engine, storage);

        let report = generator
            .run(&[AudioRequest::new("a.mp3", "olá")])
            .await
            .unwrap();

        assert_eq!(report.success_count(), 1);
        assert!(output_dir.join("a.mp3").exists());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_same_file_set() {
        let temp_dir = tempdir().unwrap();
        let storage = Arc::new(FileAssetStorage::new(temp_dir.path()));
        let requests = vec![
            AudioRequest::new("a.mp3", "um"),
            AudioRequest::new("b.mp3", "dois"),
        ];

        let first = BatchGenerator::new(no_delay(), fake_engine(b"first run", &[]), storage.clone());
        first.run(&requests).await.unwrap();
        let second = BatchGenerator::new(no_delay(), fake_engine(b"2nd", &[]), storage);
        second.run(&requests).await.unwrap();

        let mut names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.mp3", "b.mp3"]);
        assert_eq!(std::fs::read(temp_dir.path().join("a.mp3")).unwrap(), b"2nd");
    }

    #[tokio::test]
    async fn test_unusable_output_dir_fails_before_synthesis() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"file").unwrap();

        let engine = fake_engine(b"audio", &[]);
        let storage = Arc::new(FileAssetStorage::new(blocker.join("audio")));
        let generator = BatchGenerator::new(no_delay(), engine.clone(), storage);

        let result = generator.run(&[AudioRequest::new("a.mp3", "olá")]).await;

        assert!(result.is_err());
        assert_eq!(engine.calls(), 0);
    }

    #[tokio::test]
    async fn test_locale_and_speed_forwarded() {
        let temp_dir = tempdir().unwrap();
        let engine = fake_engine(b"audio", &[]);
        let storage = Arc::new(FileAssetStorage::new(temp_dir.path()));
        let generator = BatchGenerator::new(no_delay(), engine.clone(), storage);

        generator
            .run(&[AudioRequest::new("a.mp3", "olá")])
            .await
            .unwrap();

        let seen = engine.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].locale, "pt-br");
        assert!(!seen[0].slow);
        assert_eq!(seen[0].text, "olá");
    }
}
