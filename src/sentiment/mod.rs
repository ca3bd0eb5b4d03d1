//! Модуль анализа настроений
//!
//! Включает:
//! - Неизменяемые словари настроений и ключевых слов
//! - Чистую функцию оценки одного фрагмента

mod lexicon;
mod scorer;

pub use lexicon::{TagKeywords, Vocabulary};
pub use scorer::Scorer;
