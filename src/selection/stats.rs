use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::selection::genre::resolve_genre;
use crate::selection::passage::{passage_key, PassageKey};
use crate::selection::types::{Difficulty, Domain, Genre, Question, QuestionType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    pub total: usize,
    pub unique_passages: usize,
    /// 唯一文章数 / 题目数，取整百分比
    pub diversity_percent: u32,
    /// 所在文章在结果中只出现一次的题目数
    pub single_use_passage_questions: usize,
    pub genre_distribution: BTreeMap<Genre, usize>,
    pub difficulty_distribution: BTreeMap<Difficulty, usize>,
    pub question_type_distribution: BTreeMap<QuestionType, usize>,
    pub domain_distribution: BTreeMap<Domain, usize>,
}

/// 对任意一组题目（通常是选题结果）做事后统计
pub fn compute_selection_stats<'a, I>(questions: I) -> SelectionStats
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut stats = SelectionStats::default();
    let mut passages: HashMap<PassageKey, usize> = HashMap::new();

    for question in questions {
        stats.total += 1;
        *passages.entry(passage_key(question)).or_default() += 1;
        *stats
            .genre_distribution
            .entry(resolve_genre(question))
            .or_default() += 1;
        *stats
            .difficulty_distribution
            .entry(question.difficulty)
            .or_default() += 1;
        *stats
            .question_type_distribution
            .entry(question.question_type)
            .or_default() += 1;
        *stats
            .domain_distribution
            .entry(question.question_type.domain())
            .or_default() += 1;
    }

    stats.unique_passages = passages.len();
    stats.single_use_passage_questions = passages.values().filter(|&&n| n == 1).count();
    if stats.total > 0 {
        stats.diversity_percent =
            ((stats.unique_passages as f64 / stats.total as f64) * 100.0).round() as u32;
    }
    stats
}
