//! # Конвейер анализа текста
//!
//! Библиотека разбивает свободный текст на предложения, параллельно
//! оценивает каждое по фиксированным словарям настроений и ключевых
//! слов и атомарно сохраняет батч результатов в SQLite.
//!
//! ## Модули
//!
//! - `pipeline` - Сегментация, параллельная оценка, оркестрация
//! - `sentiment` - Словари и оценка настроений
//! - `store` - Устойчивое хранилище
//! - `report` - Экспорт в CSV и отправка отчётов
//! - `models` - Модели данных
//! - `error` - Типы ошибок

pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod store;

pub use error::{Error, Result};
pub use models::{ScoreResult, StoredRecord};
pub use pipeline::{ParallelMapper, Pipeline, Segmenter};
pub use report::{export_csv, EmailReport};
pub use sentiment::{Scorer, TagKeywords, Vocabulary};
pub use store::Store;
