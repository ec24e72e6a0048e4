//! Batch - 批量生成用例

mod generator;
mod report;

pub use generator::{BatchGenerator, BatchGeneratorConfig};
pub use report::{BatchReport, ItemOutcome};
