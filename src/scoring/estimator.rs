use serde::{Deserialize, Serialize};

use crate::constants::{EASY_WEIGHT, HARD_WEIGHT, MEDIUM_WEIGHT, REFERENCE_QUESTION_COUNT};
use crate::error::ScoringError;
use crate::scoring::table::scaled_from_raw;

/// 作答题目的难度构成（题数）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyBreakdown {
    pub fn total(&self) -> u64 {
        u64::from(self.easy) + u64::from(self.medium) + u64::from(self.hard)
    }

    /// 加权难度系数：easy 0.8 / medium 1.0 / hard 1.2；无数据时为 None
    pub fn multiplier(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted = self.easy as f64 * EASY_WEIGHT
            + self.medium as f64 * MEDIUM_WEIGHT
            + self.hard as f64 * HARD_WEIGHT;
        Some(weighted / total as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Below,
    Approaching,
    Meeting,
    Exceeding,
}

impl PerformanceLevel {
    pub fn from_scaled(scaled: u32) -> Self {
        match scaled {
            s if s >= 700 => PerformanceLevel::Exceeding,
            s if s >= 550 => PerformanceLevel::Meeting,
            s if s >= 450 => PerformanceLevel::Approaching,
            _ => PerformanceLevel::Below,
        }
    }
}

/// 量表分对应的近似百分位（阶梯函数）
pub fn percentile_for(scaled: u32) -> u32 {
    const STEPS: [(u32, u32); 9] = [
        (750, 99),
        (700, 93),
        (650, 83),
        (600, 69),
        (550, 53),
        (500, 37),
        (450, 23),
        (400, 12),
        (350, 5),
    ];
    STEPS
        .iter()
        .find(|&&(floor, _)| scaled >= floor)
        .map_or(1, |&(_, p)| p)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEstimate {
    pub raw_score: u64,
    pub total_questions: u64,
    /// 归一化到 54 题后的原始分
    pub normalized_raw: u32,
    pub scaled_score: u32,
    pub percentile: u32,
    pub performance_level: PerformanceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_score: Option<u32>,
}

/// 根据答对数估算量表分；total <= 0、correct < 0 或 correct > total 时返回 InvalidInput
pub fn estimate_score(
    correct: i64,
    total: i64,
    breakdown: Option<&DifficultyBreakdown>,
) -> Result<ScoreEstimate, ScoringError> {
    if total <= 0 || correct < 0 || correct > total {
        return Err(ScoringError::InvalidInput { correct, total });
    }

    let reference = REFERENCE_QUESTION_COUNT as f64;
    let normalized_raw = (correct as f64 / total as f64 * reference).round() as u32;
    let scaled_score = scaled_from_raw(normalized_raw);

    let adjusted_score = breakdown.and_then(|b| b.multiplier()).map(|multiplier| {
        let adjusted_raw = (normalized_raw as f64 * multiplier)
            .round()
            .clamp(0.0, reference) as u32;
        scaled_from_raw(adjusted_raw)
    });

    let estimate = ScoreEstimate {
        raw_score: correct as u64,
        total_questions: total as u64,
        normalized_raw,
        scaled_score,
        percentile: percentile_for(scaled_score),
        performance_level: PerformanceLevel::from_scaled(scaled_score),
        adjusted_score,
    };

    tracing::debug!(
        correct,
        total,
        normalized_raw,
        scaled = scaled_score,
        adjusted = ?estimate.adjusted_score,
        "score estimated"
    );

    Ok(estimate)
}
