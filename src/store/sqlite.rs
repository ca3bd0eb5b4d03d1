//! SQLite-хранилище оценённых фрагментов
//!
//! # Схема
//!
//! Таблица `texts` с колонками `id`, `text_chunk`, `sentiment_score`,
//! `tags`, `timestamp` и вторичным индексом `idx_score` по
//! `sentiment_score` для запросов с порогом оценки.
//!
//! Хранилище рассчитано на одного писателя в рамках процесса;
//! конкурентные писатели из разных процессов не поддерживаются.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params_from_iter, types::Value, Connection};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ScoreResult, StoredRecord};

/// Формат отметки времени вставки
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Идемпотентная инициализация схемы
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS texts (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    text_chunk      TEXT NOT NULL CHECK (length(text_chunk) > 0),
    sentiment_score INTEGER NOT NULL,
    tags            TEXT NOT NULL,
    timestamp       TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_score ON texts(sentiment_score);
";

/// SQLite-хранилище
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Открыть хранилище по пути, создав схему при необходимости
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(Error::StoreWrite)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Открыть хранилище в памяти (для тестов и разовых запусков)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::StoreWrite)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Создать схему, если её ещё нет
    ///
    /// Безопасно вызывать при каждом запуске.
    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA).map_err(Error::StoreWrite)
    }

    /// Атомарно записать батч результатов
    ///
    /// Все записи фиксируются одной транзакцией: либо весь батч,
    /// либо ничего. Каждая запись получает свежий идентификатор
    /// и текущую отметку времени вставки.
    pub fn insert_batch(&mut self, results: &[ScoreResult]) -> Result<usize> {
        let created_at = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let tx = self.conn.transaction().map_err(Error::StoreWrite)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO texts (text_chunk, sentiment_score, tags, timestamp) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(Error::StoreWrite)?;

            for result in results {
                stmt.execute(rusqlite::params![
                    result.text,
                    result.score,
                    result.tags_joined(),
                    created_at,
                ])
                .map_err(Error::StoreWrite)?;
            }
        }
        tx.commit().map_err(Error::StoreWrite)?;

        debug!(count = results.len(), "batch committed");
        Ok(results.len())
    }

    /// Запросить записи с фильтрами
    ///
    /// Фильтр по ключевому слову — чувствительный к регистру поиск
    /// подстроки через `instr`; `LIKE` в SQLite не учитывает регистр
    /// ASCII и здесь не используется. Фильтры соединяются через AND;
    /// без фильтров возвращаются все записи. Порядок — по
    /// возрастанию `id`.
    pub fn query(
        &self,
        keyword: Option<&str>,
        min_score: Option<i64>,
    ) -> Result<Vec<StoredRecord>> {
        let mut sql = String::from(
            "SELECT id, text_chunk, sentiment_score, tags, timestamp FROM texts WHERE 1=1",
        );
        let mut params: Vec<Value> = Vec::new();

        if let Some(keyword) = keyword {
            sql.push_str(&format!(" AND instr(text_chunk, ?{}) > 0", params.len() + 1));
            params.push(Value::Text(keyword.to_string()));
        }

        if let Some(min_score) = min_score {
            sql.push_str(&format!(" AND sentiment_score >= ?{}", params.len() + 1));
            params.push(Value::Integer(min_score));
        }

        sql.push_str(" ORDER BY id ASC");

        self.fetch(&sql, params)
    }

    /// Полный скан для отчётов, по возрастанию `id`
    pub fn export_all(&self) -> Result<Vec<StoredRecord>> {
        self.fetch(
            "SELECT id, text_chunk, sentiment_score, tags, timestamp \
             FROM texts ORDER BY id ASC",
            Vec::new(),
        )
    }

    fn fetch(&self, sql: &str, params: Vec<Value>) -> Result<Vec<StoredRecord>> {
        let mut stmt = self.conn.prepare(sql).map_err(Error::StoreQuery)?;

        let rows = stmt
            .query_map(params_from_iter(params), |row| {
                Ok(StoredRecord {
                    id: row.get(0)?,
                    text: row.get(1)?,
                    score: row.get(2)?,
                    tags: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })
            .map_err(Error::StoreQuery)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(Error::StoreQuery)?);
        }

        Ok(records)
    }
}
