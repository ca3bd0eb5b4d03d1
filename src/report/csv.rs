//! Экспорт записей хранилища в CSV

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::StoredRecord;

/// Сохранить записи в CSV-файл
///
/// Заголовок и порядок колонок совпадают со схемой хранилища;
/// значения пишутся дословно, теги уже сведены в одну строку.
pub fn export_csv(records: &[StoredRecord], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(&path)
        .map_err(|e| Error::Delivery(format!("failed to create CSV file: {e}")))?;

    writer
        .write_record(["ID", "Text Chunk", "Sentiment Score", "Tags", "Timestamp"])
        .map_err(|e| Error::Delivery(format!("failed to write CSV header: {e}")))?;

    for record in records {
        writer
            .write_record([
                record.id.to_string(),
                record.text.clone(),
                record.score.to_string(),
                record.tags.clone(),
                record.created_at.clone(),
            ])
            .map_err(|e| Error::Delivery(format!("failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Delivery(format!("failed to flush CSV file: {e}")))?;

    info!(
        rows = records.len(),
        path = %path.as_ref().display(),
        "CSV exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn record(id: i64, text: &str, score: i64, tags: &str) -> StoredRecord {
        StoredRecord {
            id,
            text: text.to_string(),
            score,
            tags: tags.to_string(),
            created_at: "2026-08-29 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_export_header_and_rows() {
        let file = NamedTempFile::new().unwrap();
        let records = vec![
            record(1, "This is great.", 1, ""),
            record(2, "Warning: disk error.", 0, "error,warning"),
        ];

        export_csv(&records, file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Text Chunk,Sentiment Score,Tags,Timestamp");
        assert!(lines[1].starts_with("1,This is great.,1,"));
        assert!(lines[2].contains("\"error,warning\""));
    }

    #[test]
    fn test_export_empty() {
        let file = NamedTempFile::new().unwrap();

        export_csv(&[], file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
