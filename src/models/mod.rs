//! Модели данных конвейера
//!
//! Включает:
//! - Результат оценки одного фрагмента
//! - Устойчивую запись хранилища

mod types;

pub use types::{ScoreResult, StoredRecord};
