//! Оценка одного фрагмента текста
//!
//! Чистая функция без ввода-вывода и разделяемого состояния:
//! один и тот же фрагмент всегда даёт один и тот же результат,
//! поэтому Scorer безопасно вызывать из нескольких воркеров.

use crate::models::ScoreResult;
use crate::sentiment::{TagKeywords, Vocabulary};

/// Оценщик фрагментов текста
///
/// Токенизация: текст разбивается по пробелам, из каждого токена
/// убираются все символы кроме букв, цифр, `-` и `_`, затем токен
/// приводится к нижнему регистру. Пунктуация при этом отбрасывается,
/// так что токен "good." совпадает со словом словаря "good".
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    /// Словарь настроений
    vocabulary: Vocabulary,
    /// Ключевые слова для тегирования
    keywords: TagKeywords,
}

impl Scorer {
    /// Создать оценщик со словарями по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Установить пользовательский словарь настроений
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Установить пользовательский список ключевых слов
    pub fn with_keywords(mut self, keywords: TagKeywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Оценить фрагмент текста
    ///
    /// Оценка равна числу позитивных токенов минус число негативных.
    /// Теги ищутся по границам слов во всём тексте фрагмента
    /// (без учёта регистра), каждый тег не более одного раза.
    pub fn score(&self, text: &str) -> ScoreResult {
        let mut score: i64 = 0;

        for token in text.split_whitespace() {
            let cleaned = clean_token(token);
            if cleaned.is_empty() {
                continue;
            }

            if self.vocabulary.is_positive(&cleaned) {
                score += 1;
            } else if self.vocabulary.is_negative(&cleaned) {
                score -= 1;
            }
        }

        let tags = self.keywords.find_in(&text.to_lowercase());

        ScoreResult {
            text: text.to_string(),
            score,
            tags,
        }
    }
}

/// Очистить токен от пунктуации и привести к нижнему регистру
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_arithmetic() {
        let scorer = Scorer::new();
        let result = scorer.score("This is good and great");

        assert_eq!(result.score, 2);
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_score_mixed() {
        let scorer = Scorer::new();

        assert_eq!(scorer.score("good bad").score, 0);
        assert_eq!(scorer.score("bad poor great").score, -1);
    }

    #[test]
    fn test_punctuation_stripped() {
        let scorer = Scorer::new();

        // "great." и "Bad!" должны совпасть со словарными словами
        assert_eq!(scorer.score("This is great.").score, 1);
        assert_eq!(scorer.score("Bad!").score, -1);
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = Scorer::new();

        assert_eq!(scorer.score("GOOD Great gReAt").score, 3);
    }

    #[test]
    fn test_tags_whole_word() {
        let scorer = Scorer::new();

        let tagged = scorer.score("a disk error occurred");
        assert_eq!(tagged.tags, vec!["error"]);

        // Совпадение по подстроке недопустимо
        let untagged = scorer.score("errors occurred");
        assert!(untagged.tags.is_empty());
    }

    #[test]
    fn test_tags_case_insensitive_once() {
        let scorer = Scorer::new();
        let result = scorer.score("Warning: ERROR after error");

        assert_eq!(result.tags, vec!["error", "warning"]);
    }

    #[test]
    fn test_deterministic() {
        let scorer = Scorer::new();
        let text = "good great bad warning";

        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_empty_unit() {
        let scorer = Scorer::new();
        let result = scorer.score("");

        assert_eq!(result.score, 0);
        assert!(result.tags.is_empty());
    }
}
