//! generate-free-audio - 生成免费版提示音
//!
//! 依次合成文案表中的每条提示音并写入素材目录，最后打印 `成功数/总数`。
//! 单条失败不影响其他条目；TTS 客户端不可用或输出目录无法创建时立即退出。

use runinhas_audio::config::{load_config, print_config};
use runinhas_audio::domain::free_tier_requests;
use runinhas_audio::infrastructure::build_generator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},runinhas_audio={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    print_config(&config);

    // TTS 客户端不可用时不做任何工作
    let generator = build_generator(&config)
        .map_err(|e| anyhow::anyhow!("TTS client unavailable: {}", e))?;

    let requests = free_tier_requests();
    println!("🎵 Generating {} free-tier audio files...", requests.len());

    let report = generator
        .run(&requests)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot prepare output directory: {}", e))?;

    println!("{}", report);

    Ok(())
}
