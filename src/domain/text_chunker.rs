//! 文本切块器
//!
//! 将超过服务端单次请求长度上限的文本切成若干块，每块不超过 `max_chars` 个字符

/// 默认单块最大字符数
pub const DEFAULT_MAX_CHARS: usize = 100;

/// 文本切块配置
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// 单块最大字符数（0 表示不限制）
    pub max_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// 检查是否为分隔符（句末标点和停顿标点都允许切分）
#[inline]
fn is_delimiter(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | ';' | ':' | ',' | '…' | '\n')
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 按分隔符分割（分隔符保留在前一段末尾）
fn split_by_delimiters(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if is_delimiter(ch) {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                segments.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }

    segments
}

/// 按字符边界硬切（单个词超过上限时）
fn hard_split(word: &str, max_chars: usize) -> Vec<String> {
    word.chars()
        .collect::<Vec<_>>()
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// 按空白把过长片段打包成不超过上限的若干块
fn split_on_whitespace(segment: &str, max_chars: usize) -> Vec<String> {
    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in segment.split_whitespace() {
        let word_len = char_len(word);
        if word_len > max_chars {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            pieces.extend(hard_split(word, max_chars));
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + word_len > max_chars {
            pieces.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// 相邻短块合并，直到再合并就会超过上限
fn merge_up_to_max(pieces: Vec<String>, max_chars: usize) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for piece in pieces {
        if buffer.is_empty() {
            buffer = piece;
        } else if char_len(&buffer) + 1 + char_len(&piece) <= max_chars {
            buffer.push(' ');
            buffer.push_str(&piece);
        } else {
            result.push(std::mem::replace(&mut buffer, piece));
        }
    }

    if !buffer.is_empty() {
        result.push(buffer);
    }

    result
}

/// 对文本进行切块
///
/// 切块策略：
/// 1. 未超过上限的文本原样作为一块
/// 2. 按标点切分
/// 3. 仍超长的片段按空白切分，超长单词按字符硬切
/// 4. 相邻短块合并，尽量减少请求次数
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if config.max_chars == 0 || char_len(trimmed) <= config.max_chars {
        return vec![trimmed.to_string()];
    }

    let pieces = split_by_delimiters(trimmed)
        .iter()
        .flat_map(|segment| split_on_whitespace(segment, config.max_chars))
        .collect();

    merge_up_to_max(pieces, config.max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks = chunk_text("Runa de Água em alguns segundos", &ChunkConfig::default());
        assert_eq!(chunks, vec!["Runa de Água em alguns segundos"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(chunk_text("   ", &ChunkConfig::default()).is_empty());
    }

    #[test]
    fn test_short_sentences_merged_up_to_max() {
        let config = ChunkConfig { max_chars: 9 };
        let chunks = chunk_text("Um. Dois. Três.", &config);
        assert_eq!(chunks, vec!["Um. Dois.", "Três."]);
    }

    #[test]
    fn test_words_packed_on_whitespace() {
        let config = ChunkConfig { max_chars: 7 };
        let chunks = chunk_text("aaa bbb ccc", &config);
        assert_eq!(chunks, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_long_word_hard_split() {
        let config = ChunkConfig { max_chars: 4 };
        let chunks = chunk_text("abcdefghij", &config);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_chunks_respect_max_chars() {
        let config = ChunkConfig { max_chars: 20 };
        let text = "Mudança de ciclo em alguns segundos, prepare-se. Catapulta chegando em alguns segundos!";
        let chunks = chunk_text(text, &config);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(char_len(chunk) <= 20, "chunk too long: {}", chunk);
            assert!(!chunk.is_empty());
        }
        // 按顺序拼回后不丢词
        let rejoined = chunks.join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        let restored: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_zero_max_disables_chunking() {
        let config = ChunkConfig { max_chars: 0 };
        let chunks = chunk_text("qualquer texto longo", &config);
        assert_eq!(chunks.len(), 1);
    }
}
