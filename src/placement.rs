//! 分级测试组卷：按难度配额从题池中组卷。
//!
//! 与通用选题不同，这里关心的是整张卷子的构成，因此配额在取整后会做总和修正，
//! 并在同一难度内轮转题型，让四个内容域都有覆盖。

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::selection::passage::{passage_key, PassageKey};
use crate::selection::types::{Difficulty, DifficultyDistribution, Question, QuestionType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyCounts {
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut usize {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.easy
            .saturating_add(self.medium)
            .saturating_add(self.hard)
    }
}

/// 各难度题数，保证总和等于 `target`。
/// 取整后多出的题从当前最大的档位扣除，不足的补到 medium。
pub fn allocate_difficulty_quotas(
    target: usize,
    distribution: &DifficultyDistribution,
) -> DifficultyCounts {
    let mut counts = DifficultyCounts {
        easy: distribution.target_count(Difficulty::Easy, target),
        medium: distribution.target_count(Difficulty::Medium, target),
        hard: distribution.target_count(Difficulty::Hard, target),
    };

    while counts.total() > target {
        let largest = Difficulty::ALL
            .into_iter()
            .rev()
            .max_by_key(|&d| counts.get(d))
            .unwrap_or(Difficulty::Medium);
        *counts.get_mut(largest) -= 1;
    }
    if counts.total() < target {
        counts.medium += target - counts.total();
    }
    counts
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementTest<'a> {
    pub questions: Vec<&'a Question>,
    pub quotas: DifficultyCounts,
    /// 题池不足导致缺少的题数
    pub shortfall: usize,
}

/// 从 `cursor` 指向的题型开始轮转取题，连续一整轮取不到即停止
fn take_round_robin(
    queues: &mut [Vec<usize>],
    keys: &[PassageKey],
    used_passages: &mut HashSet<PassageKey>,
    cursor: &mut usize,
    needed: usize,
    fresh_only: bool,
) -> Vec<usize> {
    let mut taken = Vec::with_capacity(needed.min(keys.len()));
    let n = queues.len();
    let mut misses = 0;
    while taken.len() < needed && misses < n {
        let qi = *cursor % n;
        *cursor = (qi + 1) % n;
        let queue = &mut queues[qi];
        let pos = queue
            .iter()
            .position(|&idx| !fresh_only || !used_passages.contains(&keys[idx]));
        match pos {
            Some(pos) => {
                let idx = queue.remove(pos);
                used_passages.insert(keys[idx].clone());
                taken.push(idx);
                misses = 0;
            }
            None => misses += 1,
        }
    }
    taken
}

/// 按难度配额组卷。每个难度内先只取未用过的文章，不够再放开；
/// 题型轮转的位置跨难度延续，保证小卷子也能覆盖各内容域。
pub fn compose_placement_test<'a, R>(
    pool: &'a [Question],
    target: usize,
    distribution: &DifficultyDistribution,
    rng: &mut R,
) -> PlacementTest<'a>
where
    R: Rng + ?Sized,
{
    let quotas = allocate_difficulty_quotas(target, distribution);
    let keys: Vec<PassageKey> = pool.iter().map(passage_key).collect();
    let mut used_passages: HashSet<PassageKey> = HashSet::new();
    let mut picked: Vec<usize> = Vec::with_capacity(target.min(pool.len()));
    let mut shortfall = 0;
    let mut cursor = 0;

    for difficulty in Difficulty::ALL {
        let needed = quotas.get(difficulty);
        if needed == 0 {
            continue;
        }

        let mut queues: Vec<Vec<usize>> = QuestionType::ALL
            .iter()
            .map(|&qt| {
                let mut queue: Vec<usize> = pool
                    .iter()
                    .enumerate()
                    .filter(|(_, q)| q.difficulty == difficulty && q.question_type == qt)
                    .map(|(idx, _)| idx)
                    .collect();
                queue.shuffle(rng);
                queue
            })
            .collect();

        let mut taken = take_round_robin(
            &mut queues,
            &keys,
            &mut used_passages,
            &mut cursor,
            needed,
            true,
        );
        if taken.len() < needed {
            let rest = needed - taken.len();
            taken.extend(take_round_robin(
                &mut queues,
                &keys,
                &mut used_passages,
                &mut cursor,
                rest,
                false,
            ));
        }

        shortfall += needed - taken.len();
        picked.extend(taken);
    }

    let mut questions: Vec<&'a Question> = picked.into_iter().map(|idx| &pool[idx]).collect();
    questions.shuffle(rng);

    if shortfall > 0 {
        tracing::debug!(
            requested = target,
            composed = questions.len(),
            shortfall,
            "placement pool too small for requested quotas"
        );
    }

    PlacementTest {
        questions,
        quotas,
        shortfall,
    }
}
