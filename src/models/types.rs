//! Типы данных для конвейера обработки текста

use serde::{Deserialize, Serialize};

/// Результат оценки одного фрагмента текста
///
/// Эфемерное значение: создаётся параллельной фазой и потребляется
/// хранилищем в рамках одного запуска конвейера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Оригинальный текст фрагмента
    pub text: String,
    /// Оценка настроения: позитивные слова минус негативные
    pub score: i64,
    /// Найденные ключевые слова, каждое не более одного раза,
    /// в порядке списка ключевых слов
    pub tags: Vec<String>,
}

impl ScoreResult {
    /// Теги в плоской форме для хранения ("error,warning")
    pub fn tags_joined(&self) -> String {
        self.tags.join(",")
    }
}

/// Устойчивая запись хранилища
///
/// Идентификатор назначается хранилищем и никогда не переиспользуется;
/// `created_at` отражает момент вставки, а не момент обработки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Уникальный идентификатор, монотонно возрастающий
    pub id: i64,
    /// Текст фрагмента
    pub text: String,
    /// Оценка настроения
    pub score: i64,
    /// Теги, соединённые запятой
    pub tags: String,
    /// Время вставки ("%Y-%m-%d %H:%M:%S", UTC)
    pub created_at: String,
}
