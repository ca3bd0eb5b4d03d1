//! Типы ошибок библиотеки
//!
//! Каждая фаза конвейера имеет собственный вариант ошибки,
//! чтобы вызывающий код видел, на каком этапе произошёл сбой.

use thiserror::Error;

/// Псевдоним Result для этого крейта
pub type Result<T> = std::result::Result<T, Error>;

/// Основной тип ошибки библиотеки
#[derive(Error, Debug)]
pub enum Error {
    /// Входной текст не удалось декодировать
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// Оценка одного фрагмента завершилась неудачей — весь батч отменяется
    #[error("scoring failed on unit {unit}: {reason}")]
    Scoring { unit: usize, reason: String },

    /// Параллельная фаза не завершилась за отведённое время
    #[error("scoring batch timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// Некорректная конфигурация (например, пересекающиеся словари)
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Батч не удалось записать в хранилище; ни одна запись не зафиксирована
    #[error("store write failed: {0}")]
    StoreWrite(#[source] rusqlite::Error),

    /// Сбой на пути чтения из хранилища
    #[error("store query failed: {0}")]
    StoreQuery(#[source] rusqlite::Error),

    /// Экспорт или отправка отчёта не удались; хранилище не затронуто
    #[error("report delivery failed: {0}")]
    Delivery(String),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
