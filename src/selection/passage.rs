//! 文章指纹：同一篇文章派生出的题目共享同一个 key，用于限制重复出题。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PASSAGE_KEY_PREFIX_CHARS;
use crate::selection::types::Question;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum PassageKey {
    /// 调用方提供的稳定文章 ID
    Explicit(String),
    /// 由归一化前缀计算的 32 位哈希
    Hashed(i32),
}

impl fmt::Display for PassageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassageKey::Explicit(id) => f.write_str(id),
            PassageKey::Hashed(h) => write!(f, "passage_{h}"),
        }
    }
}

/// 小写、合并连续空白、去首尾空白，截取前 100 个字符
pub fn normalize_passage(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut collapsed = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed.chars().take(PASSAGE_KEY_PREFIX_CHARS).collect()
}

/// 多项式滚动哈希（乘数 31，按有符号 32 位回绕）
pub fn stable_hash(text: &str) -> i32 {
    text.chars()
        .fold(0_i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

pub fn passage_key(question: &Question) -> PassageKey {
    match &question.passage_id {
        Some(id) => PassageKey::Explicit(id.clone()),
        None => PassageKey::Hashed(stable_hash(&normalize_passage(&question.passage))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(
            normalize_passage("  The  Quick\n\tBrown   FOX "),
            "the quick brown fox"
        );
    }

    #[test]
    fn normalize_truncates_by_chars() {
        let long = "é".repeat(150);
        assert_eq!(normalize_passage(&long).chars().count(), 100);
    }

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn hash_wraps_instead_of_overflowing() {
        let long = "z".repeat(500);
        assert_eq!(stable_hash(&long), stable_hash(&long));
    }

    #[test]
    fn texts_differing_after_prefix_share_a_key() {
        let base = "x".repeat(100);
        let a = format!("{base} first ending");
        let b = format!("{base} second ending");
        assert_eq!(
            stable_hash(&normalize_passage(&a)),
            stable_hash(&normalize_passage(&b))
        );
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(PassageKey::Explicit("p-7".into()).to_string(), "p-7");
        assert_eq!(PassageKey::Hashed(-12).to_string(), "passage_-12");
    }
}
