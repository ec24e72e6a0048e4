//! Batch Report - 批量生成结果汇总

use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::error::GenerateError;
use crate::domain::AudioAsset;

/// 单条请求的处理结果
#[derive(Debug)]
pub enum ItemOutcome {
    Generated(AudioAsset),
    Failed {
        filename: String,
        error: GenerateError,
    },
}

impl ItemOutcome {
    pub fn filename(&self) -> &str {
        match self {
            Self::Generated(asset) => asset.file_name().as_str(),
            Self::Failed { filename, .. } => filename,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// 批量生成报告（按处理顺序）
#[derive(Debug)]
pub struct BatchReport {
    output_dir: PathBuf,
    outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    /// 成功生成的素材
    pub fn assets(&self) -> impl Iterator<Item = &AudioAsset> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Generated(asset) => Some(asset),
            ItemOutcome::Failed { .. } => None,
        })
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.assets().map(AudioAsset::size_bytes).sum()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📁 Directory: {}", self.output_dir.display())?;
        writeln!(f)?;
        for outcome in &self.outcomes {
            match outcome {
                ItemOutcome::Generated(asset) => writeln!(
                    f,
                    "✅ {:<30} ({:.1} KB)",
                    asset.file_name().as_str(),
                    asset.size_kb()
                )?,
                ItemOutcome::Failed { filename, error } => {
                    writeln!(f, "❌ Failed to generate {}: {}", filename, error)?
                }
            }
        }
        writeln!(f)?;
        write!(
            f,
            "🎉 Done! {}/{} files generated",
            self.success_count(),
            self.total()
        )
    }
}
