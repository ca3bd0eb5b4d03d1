//! Модуль отчётов
//!
//! Включает:
//! - Экспорт записей хранилища в CSV
//! - Отправку готового отчёта по SMTP
//!
//! Сбои доставки не откатывают и не повреждают хранилище:
//! отчёт строится по уже зафиксированным данным.

mod csv;
mod email;

pub use csv::export_csv;
pub use email::EmailReport;
