//! 多样性约束选题：迭代贪心 + 约束逐级放松。
//!
//! 约束优先级：每篇文章出题上限 > 唯一文章下限 > 体裁均衡；难度分布只作为软过滤。
//! 这里刻意不做全局最优求解，尝试预算耗尽或候选集为空即返回较短结果。

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::SELECTION_ATTEMPT_MULTIPLIER;
use crate::selection::genre::resolve_genre;
use crate::selection::passage::{passage_key, PassageKey};
use crate::selection::types::{Difficulty, DifficultyDistribution, Genre, Question, SelectionConfig};

struct Annotated<'a> {
    question: &'a Question,
    genre: Genre,
    passage: PassageKey,
}

#[derive(Default)]
struct Usage {
    selected: HashSet<usize>,
    by_passage: HashMap<PassageKey, usize>,
    by_genre: HashMap<Genre, usize>,
    by_difficulty: HashMap<Difficulty, usize>,
}

impl Usage {
    fn passage_count(&self, key: &PassageKey) -> usize {
        self.by_passage.get(key).copied().unwrap_or(0)
    }

    fn is_eligible(&self, idx: usize, item: &Annotated<'_>, cap: usize) -> bool {
        !self.selected.contains(&idx) && self.passage_count(&item.passage) < cap
    }

    fn record(&mut self, idx: usize, item: &Annotated<'_>) {
        self.selected.insert(idx);
        *self.by_passage.entry(item.passage.clone()).or_default() += 1;
        *self.by_genre.entry(item.genre).or_default() += 1;
        *self.by_difficulty.entry(item.question.difficulty).or_default() += 1;
    }
}

/// 当前使用最少、且仍有可选题目的体裁；并列时取在题池中最先出现的
fn least_used_genre(
    genre_order: &[Genre],
    annotated: &[Annotated<'_>],
    usage: &Usage,
    cap: usize,
) -> Option<Genre> {
    genre_order
        .iter()
        .copied()
        .filter(|genre| {
            annotated
                .iter()
                .enumerate()
                .any(|(idx, item)| item.genre == *genre && usage.is_eligible(idx, item, cap))
        })
        .min_by_key(|genre| usage.by_genre.get(genre).copied().unwrap_or(0))
}

fn build_candidates(
    annotated: &[Annotated<'_>],
    usage: &Usage,
    cap: usize,
    need_fresh_passage: bool,
    genre: Option<Genre>,
) -> Vec<usize> {
    annotated
        .iter()
        .enumerate()
        .filter(|(idx, item)| usage.is_eligible(*idx, item, cap))
        .filter(|(_, item)| !need_fresh_passage || usage.passage_count(&item.passage) == 0)
        .filter(|(_, item)| genre.map_or(true, |g| item.genre == g))
        .map(|(idx, _)| idx)
        .collect()
}

/// 相对目标缺口最大的难度；没有正缺口时返回 None。并列按 easy, medium, hard
fn most_needed_difficulty(
    distribution: &DifficultyDistribution,
    target_count: usize,
    usage: &Usage,
) -> Option<Difficulty> {
    let mut best: Option<(Difficulty, usize)> = None;
    for difficulty in Difficulty::ALL {
        let target = distribution.target_count(difficulty, target_count);
        let have = usage.by_difficulty.get(&difficulty).copied().unwrap_or(0);
        let shortfall = target.saturating_sub(have);
        if shortfall > 0 && best.map_or(true, |(_, s)| shortfall > s) {
            best = Some((difficulty, shortfall));
        }
    }
    best.map(|(difficulty, _)| difficulty)
}

/// 从题池中选出不超过 `config.target_count` 道题。
///
/// 返回的是题池元素的引用，不会重复；题池不足以满足约束时返回较短结果而不报错。
/// 所有随机性来自 `rng`，相同种子得到相同结果。
pub fn select_questions_with_diversity<'a, R>(
    pool: &'a [Question],
    config: &SelectionConfig,
    rng: &mut R,
) -> Vec<&'a Question>
where
    R: Rng + ?Sized,
{
    let target = config.target_count;
    if pool.is_empty() || target == 0 {
        return Vec::new();
    }
    let cap = config.max_questions_per_passage;

    let annotated: Vec<Annotated<'a>> = pool
        .iter()
        .map(|question| Annotated {
            question,
            genre: resolve_genre(question),
            passage: passage_key(question),
        })
        .collect();

    let mut genre_order: Vec<Genre> = Vec::new();
    let mut passage_groups: HashMap<&PassageKey, usize> = HashMap::new();
    for item in &annotated {
        if !genre_order.contains(&item.genre) {
            genre_order.push(item.genre);
        }
        *passage_groups.entry(&item.passage).or_default() += 1;
    }

    let min_unique_passages = config.min_unique_passages();
    let max_attempts = target.saturating_mul(SELECTION_ATTEMPT_MULTIPLIER);

    let mut usage = Usage::default();
    let mut picked: Vec<usize> = Vec::with_capacity(target.min(pool.len()));
    let mut attempts = 0;

    while picked.len() < target && attempts < max_attempts {
        attempts += 1;

        let genre_target = if config.enforce_genre_balance {
            least_used_genre(&genre_order, &annotated, &usage, cap)
        } else {
            None
        };
        let need_fresh_passage = usage.by_passage.len() < min_unique_passages;

        let mut candidates =
            build_candidates(&annotated, &usage, cap, need_fresh_passage, genre_target);
        if candidates.is_empty() && genre_target.is_some() {
            candidates = build_candidates(&annotated, &usage, cap, need_fresh_passage, None);
        }
        if candidates.is_empty() {
            tracing::debug!(
                selected = picked.len(),
                requested = target,
                attempts,
                "question pool exhausted under current constraints"
            );
            break;
        }

        if let Some(distribution) = &config.difficulty_distribution {
            if let Some(wanted) = most_needed_difficulty(distribution, target, &usage) {
                let narrowed: Vec<usize> = candidates
                    .iter()
                    .copied()
                    .filter(|&idx| annotated[idx].question.difficulty == wanted)
                    .collect();
                if !narrowed.is_empty() {
                    candidates = narrowed;
                }
            }
        }

        candidates.shuffle(rng);
        let Some(&idx) = candidates.first() else {
            break;
        };
        usage.record(idx, &annotated[idx]);
        picked.push(idx);
    }

    let mut selected: Vec<&'a Question> = picked.into_iter().map(|idx| &pool[idx]).collect();
    selected.shuffle(rng);

    tracing::debug!(
        pool = pool.len(),
        pool_passages = passage_groups.len(),
        pool_genres = genre_order.len(),
        requested = target,
        selected = selected.len(),
        passages_used = usage.by_passage.len(),
        attempts,
        "diversity selection finished"
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::seeded_rng;
    use crate::selection::types::{AnswerChoice, QuestionType};

    fn question(id: &str, passage: &str, genre: Genre, difficulty: Difficulty) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::Inferences,
            passage: passage.to_string(),
            passage_id: None,
            genre: Some(genre),
            choices: ['A', 'B', 'C', 'D']
                .into_iter()
                .map(|id| AnswerChoice {
                    id,
                    text: id.to_string(),
                })
                .collect(),
            correct_answer: 'A',
            difficulty,
            explanation: String::new(),
        }
    }

    #[test]
    fn empty_pool_returns_empty() {
        let mut rng = seeded_rng(1);
        let out = select_questions_with_diversity(&[], &SelectionConfig::default(), &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_target_returns_empty() {
        let pool = vec![question("q1", "p1", Genre::Science, Difficulty::Easy)];
        let cfg = SelectionConfig {
            target_count: 0,
            ..SelectionConfig::default()
        };
        let mut rng = seeded_rng(1);
        assert!(select_questions_with_diversity(&pool, &cfg, &mut rng).is_empty());
    }

    #[test]
    fn oversized_target_returns_whole_pool() {
        let pool: Vec<Question> = (0..3)
            .map(|i| {
                question(
                    &format!("q{i}"),
                    &format!("passage {i}"),
                    Genre::Other,
                    Difficulty::Easy,
                )
            })
            .collect();
        let cfg = SelectionConfig {
            target_count: usize::MAX / 2,
            ..SelectionConfig::default()
        };
        let out = select_questions_with_diversity(&pool, &cfg, &mut seeded_rng(6));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn least_used_genre_breaks_ties_by_pool_order() {
        let pool = vec![
            question("q1", "p1", Genre::History, Difficulty::Easy),
            question("q2", "p2", Genre::Science, Difficulty::Easy),
        ];
        let annotated: Vec<Annotated<'_>> = pool
            .iter()
            .map(|q| Annotated {
                question: q,
                genre: resolve_genre(q),
                passage: passage_key(q),
            })
            .collect();
        let order = vec![Genre::History, Genre::Science];
        let mut usage = Usage::default();
        assert_eq!(
            least_used_genre(&order, &annotated, &usage, 1),
            Some(Genre::History)
        );

        usage.record(0, &annotated[0]);
        assert_eq!(
            least_used_genre(&order, &annotated, &usage, 1),
            Some(Genre::Science)
        );

        usage.record(1, &annotated[1]);
        assert_eq!(least_used_genre(&order, &annotated, &usage, 1), None);
    }

    #[test]
    fn most_needed_difficulty_prefers_largest_shortfall() {
        let dist = DifficultyDistribution::new(20, 30, 50);
        let usage = Usage::default();
        assert_eq!(
            most_needed_difficulty(&dist, 10, &usage),
            Some(Difficulty::Hard)
        );

        let mut usage = Usage::default();
        usage.by_difficulty.insert(Difficulty::Hard, 5);
        usage.by_difficulty.insert(Difficulty::Medium, 3);
        assert_eq!(
            most_needed_difficulty(&dist, 10, &usage),
            Some(Difficulty::Easy)
        );

        usage.by_difficulty.insert(Difficulty::Easy, 2);
        assert_eq!(most_needed_difficulty(&dist, 10, &usage), None);
    }

    #[test]
    fn genre_balance_spreads_across_genres() {
        let mut pool = Vec::new();
        for i in 0..6 {
            pool.push(question(
                &format!("s{i}"),
                &format!("science passage {i}"),
                Genre::Science,
                Difficulty::Medium,
            ));
        }
        pool.push(question("h0", "history passage 0", Genre::History, Difficulty::Medium));
        pool.push(question("h1", "history passage 1", Genre::History, Difficulty::Medium));

        let cfg = SelectionConfig {
            target_count: 4,
            max_questions_per_passage: 1,
            min_unique_passage_percent: 100,
            enforce_genre_balance: true,
            difficulty_distribution: None,
        };
        let mut rng = seeded_rng(9);
        let out = select_questions_with_diversity(&pool, &cfg, &mut rng);
        let history = out.iter().filter(|q| q.genre == Some(Genre::History)).count();
        assert_eq!(out.len(), 4);
        assert_eq!(history, 2);
    }

    #[test]
    fn difficulty_target_steers_picks() {
        let mut pool = Vec::new();
        for i in 0..10 {
            let difficulty = if i < 5 { Difficulty::Easy } else { Difficulty::Hard };
            pool.push(question(
                &format!("q{i}"),
                &format!("passage {i}"),
                Genre::Other,
                difficulty,
            ));
        }
        let cfg = SelectionConfig {
            target_count: 4,
            max_questions_per_passage: 1,
            min_unique_passage_percent: 0,
            enforce_genre_balance: false,
            difficulty_distribution: Some(DifficultyDistribution::new(0, 0, 100)),
        };
        let mut rng = seeded_rng(3);
        let out = select_questions_with_diversity(&pool, &cfg, &mut rng);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|q| q.difficulty == Difficulty::Hard));
    }

    #[test]
    fn same_seed_same_selection() {
        let pool: Vec<Question> = (0..20)
            .map(|i| {
                question(
                    &format!("q{i}"),
                    &format!("passage {}", i / 2),
                    Genre::Other,
                    Difficulty::Medium,
                )
            })
            .collect();
        let cfg = SelectionConfig::default();
        let a: Vec<&str> = select_questions_with_diversity(&pool, &cfg, &mut seeded_rng(77))
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        let b: Vec<&str> = select_questions_with_diversity(&pool, &cfg, &mut seeded_rng(77))
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(a, b);
    }
}
