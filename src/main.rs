//! CLI конвейера анализа текста
//!
//! Использование:
//! ```bash
//! cargo run -- --help
//! cargo run -- process --file project.txt
//! cargo run -- search --keyword error --min-score 0
//! cargo run -- export --output output.csv
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_text_pipeline::{
    export_csv, EmailReport, Error, ParallelMapper, Pipeline, Store,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "text_pipeline")]
#[command(version = "0.1.0")]
#[command(about = "Sentiment scoring pipeline for free text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Путь к файлу базы данных
    #[arg(long, default_value = "text_processor.db")]
    db: PathBuf,

    /// Уровень логирования
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Обработать текстовый файл и сохранить результаты
    Process {
        /// Путь к входному файлу
        #[arg(short, long)]
        file: PathBuf,

        /// Число воркеров (0 = число процессоров)
        #[arg(short, long, default_value = "0")]
        workers: usize,

        /// Предельное время оценки батча в секундах
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Поиск по сохранённым записям
    Search {
        /// Подстрока для поиска (чувствительна к регистру)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Минимальная оценка настроения
        #[arg(short, long)]
        min_score: Option<i64>,
    },

    /// Экспортировать все записи в CSV
    Export {
        /// Путь к выходному файлу
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,
    },

    /// Экспортировать и отправить отчёт по почте
    Report {
        /// Путь к выходному файлу
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,

        /// Адрес SMTP-сервера
        #[arg(long, default_value = "localhost")]
        smtp_host: String,

        /// Порт SMTP-сервера
        #[arg(long, default_value = "25")]
        smtp_port: u16,

        /// Адрес отправителя
        #[arg(long)]
        from: String,

        /// Адрес получателя
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process {
            file,
            workers,
            timeout_secs,
        } => run_process(&cli.db, &file, workers, timeout_secs)?,
        Commands::Search { keyword, min_score } => run_search(&cli.db, keyword, min_score)?,
        Commands::Export { output } => run_export(&cli.db, &output)?,
        Commands::Report {
            output,
            smtp_host,
            smtp_port,
            from,
            to,
        } => run_report(&cli.db, &output, &smtp_host, smtp_port, &from, &to)?,
    }

    Ok(())
}

fn run_process(
    db: &PathBuf,
    file: &PathBuf,
    workers: usize,
    timeout_secs: Option<u64>,
) -> Result<()> {
    if !file.exists() {
        println!("File not found: {}", file.display());
        return Ok(());
    }

    let bytes = fs::read(file).map_err(Error::Io)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::Segmentation(format!("input is not valid UTF-8: {e}")))?;

    let mut mapper = ParallelMapper::new().with_workers(workers);
    if let Some(secs) = timeout_secs {
        mapper = mapper.with_timeout(Duration::from_secs(secs));
    }

    let pipeline = Pipeline::new().with_mapper(mapper);
    let mut store = Store::open(db)?;

    info!("processing {}", file.display());
    let inserted = pipeline.run(&text, &mut store)?;

    println!("Processing completed: {inserted} records saved");
    Ok(())
}

fn run_search(db: &PathBuf, keyword: Option<String>, min_score: Option<i64>) -> Result<()> {
    let store = Store::open(db)?;
    let records = store.query(keyword.as_deref(), min_score)?;

    println!("Found {} records\n", records.len());
    for record in records {
        let tags = if record.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", record.tags)
        };
        println!("#{} ({:+}){} {}", record.id, record.score, tags, record.text);
    }

    Ok(())
}

fn run_export(db: &PathBuf, output: &PathBuf) -> Result<()> {
    let store = Store::open(db)?;
    let records = store.export_all()?;

    export_csv(&records, output)?;
    println!("CSV exported successfully to {}", output.display());
    Ok(())
}

fn run_report(
    db: &PathBuf,
    output: &PathBuf,
    smtp_host: &str,
    smtp_port: u16,
    from: &str,
    to: &str,
) -> Result<()> {
    run_export(db, output)?;

    let report = EmailReport::new(smtp_host, from, to).with_port(smtp_port);

    // Сбой доставки не должен отменять уже сохранённые данные
    match report.send(output) {
        Ok(()) => println!("Email sent successfully!"),
        Err(e) => error!("report delivery failed: {e}"),
    }

    Ok(())
}
