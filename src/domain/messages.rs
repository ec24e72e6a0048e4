//! 免费版提示音文案
//!
//! 固定文案，不含 `{seconds}` 占位符；文件名与后端素材目录中的名字一一对应。

use super::audio::AudioRequest;

/// 免费版提示音：(文件名, 葡萄牙语文本)
pub const FREE_TIER_MESSAGES: &[(&str, &str)] = &[
    (
        "bounty_rune_warning.mp3",
        "Runa de Recompensa em alguns segundos",
    ),
    ("power_rune_warning.mp3", "Runa de Poder em alguns segundos"),
    (
        "wisdom_rune_warning.mp3",
        "Runa de Sabedoria em alguns segundos",
    ),
    ("water_rune_warning.mp3", "Runa de Água em alguns segundos"),
    (
        "stack_timing_warning.mp3",
        "Hora de stackar em alguns segundos",
    ),
    (
        "catapult_timing_warning.mp3",
        "Catapulta chegando em alguns segundos",
    ),
    (
        "day_night_cycle_warning.mp3",
        "Mudança de ciclo em alguns segundos",
    ),
];

/// 按表顺序构造生成请求
pub fn free_tier_requests() -> Vec<AudioRequest> {
    FREE_TIER_MESSAGES
        .iter()
        .map(|(filename, text)| AudioRequest::new(*filename, *text))
        .collect()
}
