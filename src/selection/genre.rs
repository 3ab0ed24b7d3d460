//! 体裁识别：有序关键词规则，首个命中即返回。
//!
//! 规则之间并不互斥（"story" 与 "culture" 可能同时出现），因此顺序本身就是规则的一部分：
//! 诗歌这类结构特征优先于容易重叠的词汇类别。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::selection::types::{Genre, Question};

static YEAR_1800S_1900S: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b1[89]\d{2}\b").expect("valid regex"));

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("valid regex"));

const POETRY_KEYWORDS: &[&str] = &["poem", "verse", "stanza"];
const SCIENCE_KEYWORDS: &[&str] = &[
    "study",
    "research",
    "experiment",
    "hypothesis",
    "data",
    "findings",
];
const HISTORY_KEYWORDS: &[&str] = &[
    "century",
    "historical",
    "declaration",
    "president",
    "congress",
];
const JOURNALISM_KEYWORDS: &[&str] = &["reporter", "news", "article", "according to", "sources say"];
const SOCIAL_SCIENCE_KEYWORDS: &[&str] =
    &["psychology", "society", "behavior", "economic", "cultural"];
const LITERATURE_KEYWORDS: &[&str] = &[
    "novel",
    "story",
    "character",
    "narrator",
    "she said",
    "he said",
];
const MEMOIR_KEYWORDS: &[&str] = &[
    "i remember",
    "my father",
    "my mother",
    "when i was",
    "autobiography",
];
const HUMANITIES_KEYWORDS: &[&str] = &["art", "philosophy", "aesthetic", "culture", "museum"];

const MIN_STANZA_BREAKS: usize = 2;
const MIN_POEM_LINES: usize = 6;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn looks_like_verse(text: &str) -> bool {
    BLANK_LINE.find_iter(text).count() >= MIN_STANZA_BREAKS
        && text.lines().count() >= MIN_POEM_LINES
}

pub fn detect_genre(passage: &str, source_hint: Option<&str>) -> Genre {
    let mut text = passage.to_lowercase();
    if let Some(hint) = source_hint {
        text.push(' ');
        text.push_str(&hint.to_lowercase());
    }

    if contains_any(&text, POETRY_KEYWORDS) || looks_like_verse(&text) {
        Genre::Poetry
    } else if contains_any(&text, SCIENCE_KEYWORDS) {
        Genre::Science
    } else if contains_any(&text, HISTORY_KEYWORDS) || YEAR_1800S_1900S.is_match(&text) {
        Genre::History
    } else if contains_any(&text, JOURNALISM_KEYWORDS) {
        Genre::Journalism
    } else if contains_any(&text, SOCIAL_SCIENCE_KEYWORDS) {
        Genre::SocialScience
    } else if contains_any(&text, LITERATURE_KEYWORDS) {
        Genre::Literature
    } else if contains_any(&text, MEMOIR_KEYWORDS) {
        Genre::Memoir
    } else if contains_any(&text, HUMANITIES_KEYWORDS) {
        Genre::Humanities
    } else {
        Genre::Other
    }
}

/// 已有体裁标签优先，否则按文章内容识别
pub fn resolve_genre(question: &Question) -> Genre {
    question
        .genre
        .unwrap_or_else(|| detect_genre(&question.passage, None))
}
