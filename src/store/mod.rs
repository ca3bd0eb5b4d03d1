//! Модуль устойчивого хранилища
//!
//! Включает:
//! - SQLite-хранилище с атомарной записью батча
//! - Фильтрованные запросы и полный скан для отчётов

mod sqlite;

pub use sqlite::Store;
