/// 正式考试 ERW 部分题目数量，原始分按此归一化
pub const REFERENCE_QUESTION_COUNT: u32 = 54;

/// 量表分下限
pub const MIN_SCALED_SCORE: u32 = 200;

/// 量表分上限
pub const MAX_SCALED_SCORE: u32 = 800;

/// 计算文章指纹时保留的归一化前缀长度（字符数）
pub const PASSAGE_KEY_PREFIX_CHARS: usize = 100;

/// 选题循环的尝试预算倍数：最多 target_count * 此值 次
pub const SELECTION_ATTEMPT_MULTIPLIER: usize = 10;

/// 默认每次选题数量
pub const DEFAULT_TARGET_COUNT: usize = 10;

/// 默认每篇文章最多出题数
pub const DEFAULT_MAX_QUESTIONS_PER_PASSAGE: usize = 2;

/// 默认唯一文章占比下限（百分比）
pub const DEFAULT_MIN_UNIQUE_PASSAGE_PERCENT: u32 = 70;

/// 难度加权系数
pub const EASY_WEIGHT: f64 = 0.8;
pub const MEDIUM_WEIGHT: f64 = 1.0;
pub const HARD_WEIGHT: f64 = 1.2;
