use sat_erw_core::selection::{AnswerChoice, Difficulty, Genre, Question, QuestionType};

pub fn choices() -> Vec<AnswerChoice> {
    ['A', 'B', 'C', 'D']
        .into_iter()
        .map(|id| AnswerChoice {
            id,
            text: format!("choice {id}"),
        })
        .collect()
}

pub fn question(id: &str, passage: &str) -> Question {
    Question {
        id: id.to_string(),
        question_type: QuestionType::CentralIdeasDetails,
        passage: passage.to_string(),
        passage_id: None,
        genre: None,
        choices: choices(),
        correct_answer: 'B',
        difficulty: Difficulty::Medium,
        explanation: "seed".to_string(),
    }
}

pub fn tagged_question(
    id: &str,
    passage: &str,
    genre: Genre,
    difficulty: Difficulty,
    question_type: QuestionType,
) -> Question {
    Question {
        genre: Some(genre),
        difficulty,
        question_type,
        ..question(id, passage)
    }
}

/// `passages` 篇文章，每篇 `per_passage` 道题
pub fn seed_pool(passages: usize, per_passage: usize) -> Vec<Question> {
    let mut out = Vec::with_capacity(passages * per_passage);
    for p in 0..passages {
        for q in 0..per_passage {
            out.push(question(
                &format!("p{p}-q{q}"),
                &format!("Passage number {p} describes a quiet harbor town."),
            ));
        }
    }
    out
}

pub fn genre_from_index(idx: usize) -> Genre {
    const GENRES: [Genre; 10] = [
        Genre::Literature,
        Genre::Poetry,
        Genre::Drama,
        Genre::History,
        Genre::Science,
        Genre::Journalism,
        Genre::SocialScience,
        Genre::Memoir,
        Genre::Humanities,
        Genre::Other,
    ];
    GENRES[idx % GENRES.len()]
}

pub fn difficulty_from_index(idx: usize) -> Difficulty {
    Difficulty::ALL[idx % Difficulty::ALL.len()]
}
