use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_QUESTIONS_PER_PASSAGE, DEFAULT_MIN_UNIQUE_PASSAGE_PERCENT, DEFAULT_TARGET_COUNT,
};
use crate::error::QuestionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    InformationAndIdeas,
    CraftAndStructure,
    ExpressionOfIdeas,
    StandardEnglishConventions,
}

/// ERW 十类题型，按所属内容域分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    CentralIdeasDetails,
    CommandOfEvidence,
    Inferences,
    WordsInContext,
    TextStructurePurpose,
    CrossTextConnections,
    RhetoricalSynthesis,
    Transitions,
    Boundaries,
    FormStructureSense,
}

impl QuestionType {
    pub const ALL: [QuestionType; 10] = [
        QuestionType::CentralIdeasDetails,
        QuestionType::CommandOfEvidence,
        QuestionType::Inferences,
        QuestionType::WordsInContext,
        QuestionType::TextStructurePurpose,
        QuestionType::CrossTextConnections,
        QuestionType::RhetoricalSynthesis,
        QuestionType::Transitions,
        QuestionType::Boundaries,
        QuestionType::FormStructureSense,
    ];

    pub fn domain(self) -> Domain {
        match self {
            QuestionType::CentralIdeasDetails
            | QuestionType::CommandOfEvidence
            | QuestionType::Inferences => Domain::InformationAndIdeas,
            QuestionType::WordsInContext
            | QuestionType::TextStructurePurpose
            | QuestionType::CrossTextConnections => Domain::CraftAndStructure,
            QuestionType::RhetoricalSynthesis | QuestionType::Transitions => {
                Domain::ExpressionOfIdeas
            }
            QuestionType::Boundaries | QuestionType::FormStructureSense => {
                Domain::StandardEnglishConventions
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Literature,
    Poetry,
    Drama,
    History,
    Science,
    Journalism,
    SocialScience,
    Memoir,
    Humanities,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub id: char,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub passage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    pub choices: Vec<AnswerChoice>,
    pub correct_answer: char,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
}

const CHOICE_IDS: [char; 4] = ['A', 'B', 'C', 'D'];

impl Question {
    /// 检查选项结构：恰好四个选项，依次为 A-D，正确答案在其中
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.choices.len() != CHOICE_IDS.len() {
            return Err(QuestionError::ChoiceCount {
                id: self.id.clone(),
                count: self.choices.len(),
            });
        }
        for (position, (choice, expected)) in self.choices.iter().zip(CHOICE_IDS).enumerate() {
            if choice.id != expected {
                return Err(QuestionError::ChoiceOrder {
                    id: self.id.clone(),
                    position,
                    expected,
                    found: choice.id,
                });
            }
        }
        if !CHOICE_IDS.contains(&self.correct_answer) {
            return Err(QuestionError::UnknownAnswer {
                id: self.id.clone(),
                answer: self.correct_answer,
            });
        }
        Ok(())
    }
}

/// 难度百分比分布；选题时作为目标，推荐时作为输出
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyDistribution {
    pub const fn new(easy: u32, medium: u32, hard: u32) -> Self {
        Self { easy, medium, hard }
    }

    pub fn percent(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// 按 round-half-up 计算各难度目标题数，不做总和修正
    pub fn target_count(&self, difficulty: Difficulty, total: usize) -> usize {
        total
            .saturating_mul(self.percent(difficulty) as usize)
            .saturating_add(50)
            / 100
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    pub target_count: usize,
    pub max_questions_per_passage: usize,
    pub min_unique_passage_percent: u32,
    pub enforce_genre_balance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_distribution: Option<DifficultyDistribution>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            max_questions_per_passage: DEFAULT_MAX_QUESTIONS_PER_PASSAGE,
            min_unique_passage_percent: DEFAULT_MIN_UNIQUE_PASSAGE_PERCENT,
            enforce_genre_balance: true,
            difficulty_distribution: None,
        }
    }
}

impl SelectionConfig {
    /// 将百分比夹到 0-100，每篇上限至少为 1
    pub fn validated(mut self) -> Self {
        self.min_unique_passage_percent = self.min_unique_passage_percent.min(100);
        self.max_questions_per_passage = self.max_questions_per_passage.max(1);
        self
    }

    /// 唯一文章数下限：ceil(target * percent / 100)
    pub fn min_unique_passages(&self) -> usize {
        self.target_count
            .saturating_mul(self.min_unique_passage_percent as usize)
            .div_ceil(100)
    }
}
