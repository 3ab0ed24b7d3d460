pub mod estimator;
pub mod recommend;
pub mod table;

pub use estimator::{estimate_score, percentile_for, DifficultyBreakdown, PerformanceLevel, ScoreEstimate};
pub use recommend::recommend_difficulty;
pub use table::{interpolate, scaled_from_raw, RAW_TO_SCALED};
