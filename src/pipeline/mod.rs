//! Конвейер обработки текста
//!
//! Включает:
//! - Сегментацию текста на фрагменты
//! - Параллельную оценку фрагментов
//! - Атомарную запись батча в хранилище

mod parallel;
mod segmenter;

pub use parallel::ParallelMapper;
pub use segmenter::Segmenter;

use tracing::info;

use crate::error::Result;
use crate::models::ScoreResult;
use crate::sentiment::Scorer;
use crate::store::Store;

/// Конвейер: сегментация → параллельная оценка → запись батча
///
/// Параллельная фаза не выполняет ввод-вывод; хранилище затрагивается
/// только после того, как весь батч оценён. Если любая фаза падает,
/// хранилище остаётся в состоянии до запуска.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    /// Сегментатор
    segmenter: Segmenter,
    /// Оценщик фрагментов
    scorer: Scorer,
    /// Параллельный маппер
    mapper: ParallelMapper,
}

impl Pipeline {
    /// Создать конвейер с настройками по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Установить оценщик
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Установить маппер
    pub fn with_mapper(mut self, mapper: ParallelMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// Сегментировать и оценить текст, не записывая результаты
    pub fn process(&self, text: &str) -> Result<Vec<ScoreResult>> {
        let units = self.segmenter.segment(text);
        info!(units = units.len(), "text segmented");

        let scorer = self.scorer.clone();
        let results = self.mapper.run(units, move |unit| Ok(scorer.score(unit)))?;
        info!(results = results.len(), "batch scored");

        Ok(results)
    }

    /// Выполнить полный запуск: оценить текст и записать батч
    ///
    /// Возвращает число записанных записей. Батч фиксируется целиком
    /// или не фиксируется вовсе.
    pub fn run(&self, text: &str, store: &mut Store) -> Result<usize> {
        let results = self.process(text)?;
        let inserted = store.insert_batch(&results)?;
        info!(inserted, "batch persisted");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_scores_and_tags() {
        let pipeline = Pipeline::new();
        let results = pipeline
            .process("This is great. That was bad! Warning: disk error.")
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, 1);
        assert_eq!(results[1].score, -1);
        assert_eq!(results[2].score, 0);

        assert!(results[0].tags.is_empty());
        assert!(results[1].tags.is_empty());
        assert_eq!(results[2].tags, vec!["error", "warning"]);
    }

    #[test]
    fn test_empty_text() {
        let pipeline = Pipeline::new();

        assert!(pipeline.process("").unwrap().is_empty());
    }

    #[test]
    fn test_run_persists_batch() {
        let mut store = Store::open_in_memory().unwrap();
        let pipeline = Pipeline::new();

        let inserted = pipeline
            .run("Good start. Poor finish.", &mut store)
            .unwrap();

        assert_eq!(inserted, 2);

        let records = store.export_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score, 1);
        assert_eq!(records[1].score, -1);
    }
}
