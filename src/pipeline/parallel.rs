//! Параллельное применение оценщика к фрагментам
//!
//! Пул воркеров фиксированного размера выполняет оценку каждого
//! фрагмента независимо; результаты возвращаются строго в порядке
//! входа, несмотря на неупорядоченное завершение воркеров.

use std::sync::mpsc;
use std::time::Duration;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::models::ScoreResult;

/// Параллельный маппер с пулом воркеров
///
/// Политика отказа: ошибка на любом фрагменте отменяет весь батч
/// и возвращает одну ошибку с номером фрагмента; частичные
/// результаты наружу не выходят.
#[derive(Debug, Clone)]
pub struct ParallelMapper {
    /// Размер пула; 0 означает число процессоров хоста
    workers: usize,
    /// Предельное время на весь батч
    timeout: Option<Duration>,
}

impl ParallelMapper {
    /// Создать маппер с пулом размером в число процессоров
    pub fn new() -> Self {
        Self {
            workers: 0,
            timeout: None,
        }
    }

    /// Установить размер пула воркеров
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Установить предельное время на батч
    ///
    /// В исходной схеме зависший воркер блокировал бы запуск
    /// навсегда; с таймаутом батч завершается ошибкой целиком.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Применить операцию к каждому фрагменту параллельно
    ///
    /// `result[i]` соответствует `units[i]`: упорядоченный сбор —
    /// часть контракта, а не побочное свойство выбранного пула.
    pub fn run<F>(&self, units: Vec<String>, op: F) -> Result<Vec<ScoreResult>>
    where
        F: Fn(&str) -> Result<ScoreResult> + Send + Sync + 'static,
    {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::Config(format!("failed to build worker pool: {e}")))?;

        let (tx, rx) = mpsc::channel();

        pool.spawn(move || {
            let outcome: Result<Vec<ScoreResult>> = units
                .par_iter()
                .enumerate()
                .map(|(i, unit)| {
                    op(unit).map_err(|e| Error::Scoring {
                        unit: i,
                        reason: e.to_string(),
                    })
                })
                .collect();
            // Приёмник мог уйти по таймауту; результат тогда отбрасывается
            let _ = tx.send(outcome);
        });

        match self.timeout {
            Some(timeout) => rx.recv_timeout(timeout).map_err(|_| Error::Timeout {
                secs: timeout.as_secs(),
            })?,
            None => rx
                .recv()
                .map_err(|_| Error::Scoring {
                    unit: 0,
                    reason: "worker pool dropped the batch".to_string(),
                })?,
        }
    }
}

impl Default for ParallelMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Scorer;

    fn sample_units() -> Vec<String> {
        vec![
            "This is great.".to_string(),
            "That was bad!".to_string(),
            "Warning: disk error.".to_string(),
            "Nothing special here.".to_string(),
        ]
    }

    #[test]
    fn test_order_preserved() {
        let scorer = Scorer::new();
        let mapper = ParallelMapper::new().with_workers(4);

        let results = mapper
            .run(sample_units(), move |u| Ok(scorer.score(u)))
            .unwrap();

        let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "This is great.",
                "That was bad!",
                "Warning: disk error.",
                "Nothing special here.",
            ]
        );
    }

    #[test]
    fn test_worker_count_independent() {
        let sequential = {
            let scorer = Scorer::new();
            ParallelMapper::new()
                .with_workers(1)
                .run(sample_units(), move |u| Ok(scorer.score(u)))
                .unwrap()
        };
        let parallel = {
            let scorer = Scorer::new();
            ParallelMapper::new()
                .with_workers(8)
                .run(sample_units(), move |u| Ok(scorer.score(u)))
                .unwrap()
        };

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_failure_aborts_batch() {
        let mapper = ParallelMapper::new().with_workers(2);

        let result = mapper.run(sample_units(), |u| {
            if u.contains("bad") {
                Err(Error::Config("boom".to_string()))
            } else {
                Ok(ScoreResult {
                    text: u.to_string(),
                    score: 0,
                    tags: Vec::new(),
                })
            }
        });

        match result {
            Err(Error::Scoring { unit, .. }) => assert_eq!(unit, 1),
            other => panic!("expected scoring error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch() {
        let scorer = Scorer::new();
        let mapper = ParallelMapper::new();

        let results = mapper.run(Vec::new(), move |u| Ok(scorer.score(u))).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_timeout_fails_batch() {
        let mapper = ParallelMapper::new()
            .with_workers(1)
            .with_timeout(Duration::from_millis(50));

        let result = mapper.run(sample_units(), |u| {
            std::thread::sleep(Duration::from_secs(5));
            Ok(ScoreResult {
                text: u.to_string(),
                score: 0,
                tags: Vec::new(),
            })
        });

        assert!(matches!(result, Err(Error::Timeout { .. })));
    }
}
