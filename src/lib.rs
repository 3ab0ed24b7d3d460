//! SAT 阅读与写作（ERW）练习核心：题目选择与分数估算。
//!
//! 两个组件都是纯函数：不做 I/O，不持有共享可变状态，随机源由调用方注入。

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod placement;
pub mod scoring;
pub mod selection;

pub use error::{QuestionError, ScoringError};
pub use placement::{allocate_difficulty_quotas, compose_placement_test, PlacementTest};
pub use scoring::{estimate_score, recommend_difficulty, PerformanceLevel, ScoreEstimate};
pub use selection::{
    compute_selection_stats, detect_genre, passage_key, seeded_rng,
    select_questions_with_diversity, Difficulty, DifficultyDistribution, Genre, Question,
    QuestionType, SelectionConfig, SelectionStats,
};
