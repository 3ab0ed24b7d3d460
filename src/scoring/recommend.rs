use crate::selection::types::DifficultyDistribution;

/// 根据近期正确率给出下一轮的难度配比（百分比，和为 100）。
/// 四档阈值为产品标定值：80 / 60 / 40。
pub fn recommend_difficulty(recent_accuracy_percent: f64) -> DifficultyDistribution {
    if recent_accuracy_percent >= 80.0 {
        DifficultyDistribution::new(10, 40, 50)
    } else if recent_accuracy_percent >= 60.0 {
        DifficultyDistribution::new(20, 50, 30)
    } else if recent_accuracy_percent >= 40.0 {
        DifficultyDistribution::new(40, 45, 15)
    } else {
        DifficultyDistribution::new(60, 35, 5)
    }
}
