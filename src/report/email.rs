//! Отправка отчёта по электронной почте
//!
//! Отправка идёт по простому SMTP без TLS и аутентификации;
//! доставка считается best-effort и никак не влияет на хранилище.

use std::fs;
use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::error::{Error, Result};

/// Конфигурация почтового отчёта
#[derive(Debug, Clone)]
pub struct EmailReport {
    /// Адрес SMTP-сервера
    smtp_host: String,
    /// Порт SMTP-сервера
    smtp_port: u16,
    /// Адрес отправителя
    from: String,
    /// Адрес получателя
    to: String,
}

impl EmailReport {
    /// Создать конфигурацию отчёта
    pub fn new(smtp_host: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            smtp_port: 25,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Установить порт SMTP-сервера
    pub fn with_port(mut self, port: u16) -> Self {
        self.smtp_port = port;
        self
    }

    /// Отправить файл отчёта вложением
    pub fn send(&self, attachment_path: impl AsRef<Path>) -> Result<()> {
        let path = attachment_path.as_ref();

        let file_data = fs::read(path)
            .map_err(|e| Error::Delivery(format!("failed to read report file: {e}")))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report.csv".to_string());

        let message = self.build_message(file_name, file_data)?;

        let mailer = SmtpTransport::builder_dangerous(self.smtp_host.as_str())
            .port(self.smtp_port)
            .build();

        mailer
            .send(&message)
            .map_err(|e| Error::Delivery(format!("SMTP send failed: {e}")))?;

        info!(to = %self.to, "report email sent");
        Ok(())
    }

    fn build_message(&self, file_name: String, file_data: Vec<u8>) -> Result<Message> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| Error::Delivery(format!("invalid sender address: {e}")))?;
        let to: Mailbox = self
            .to
            .parse()
            .map_err(|e| Error::Delivery(format!("invalid recipient address: {e}")))?;

        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| Error::Delivery(format!("invalid attachment type: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject("Text Processing Report")
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(
                        "Attached is your text processing report.".to_string(),
                    ))
                    .singlepart(Attachment::new(file_name).body(file_data, content_type)),
            )
            .map_err(|e| Error::Delivery(format!("failed to build message: {e}")))
    }
}
