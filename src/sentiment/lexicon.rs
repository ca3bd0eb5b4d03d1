//! Словари настроений и ключевых слов
//!
//! Неизменяемая конфигурация: строится один раз, передаётся явно
//! и никогда не мутируется после создания. Благодаря этому словари
//! безопасно разделяются между воркерами без синхронизации.

use std::collections::HashSet;

use regex::Regex;

use crate::error::{Error, Result};

/// Позитивные слова по умолчанию
const DEFAULT_POSITIVE: &[&str] = &["good", "excellent", "happy", "success", "great", "positive"];

/// Негативные слова по умолчанию
const DEFAULT_NEGATIVE: &[&str] = &["bad", "terrible", "sad", "failure", "poor", "negative"];

/// Ключевые слова по умолчанию
const DEFAULT_KEYWORDS: &[&str] = &["error", "warning", "critical"];

/// Словарь настроений
///
/// Два непересекающихся списка слов; совпадение считается только
/// при точном равенстве токена слову словаря (без регистра).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Позитивные слова (в нижнем регистре)
    positive: HashSet<String>,
    /// Негативные слова (в нижнем регистре)
    negative: HashSet<String>,
}

impl Vocabulary {
    /// Создать словарь из двух списков слов
    ///
    /// Списки обязаны не пересекаться: слово одновременно в обоих
    /// списках сделало бы оценку неопределённой, поэтому такая
    /// конфигурация отвергается на этапе создания.
    pub fn new<S: AsRef<str>>(positive: &[S], negative: &[S]) -> Result<Self> {
        let positive: HashSet<String> =
            positive.iter().map(|w| w.as_ref().to_lowercase()).collect();
        let negative: HashSet<String> =
            negative.iter().map(|w| w.as_ref().to_lowercase()).collect();

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(Error::Config(format!(
                "word '{word}' appears in both positive and negative lists"
            )));
        }

        Ok(Self { positive, negative })
    }

    /// Словарь по умолчанию
    pub fn default_english() -> Self {
        // Списки по умолчанию не пересекаются, new не может вернуть ошибку
        Self::new(DEFAULT_POSITIVE, DEFAULT_NEGATIVE)
            .unwrap_or_else(|_| unreachable!("default word lists are disjoint"))
    }

    /// Есть ли слово в позитивном списке
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Есть ли слово в негативном списке
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Количество слов в обоих списках
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Пуст ли словарь
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::default_english()
    }
}

/// Список ключевых слов для тегирования
///
/// Каждое слово компилируется в регулярное выражение `\b<слово>\b`
/// один раз при создании; поиск идёт по всему тексту фрагмента
/// в нижнем регистре, по границам слов (не по подстроке).
#[derive(Debug, Clone)]
pub struct TagKeywords {
    /// Пары (ключевое слово, скомпилированный шаблон)
    patterns: Vec<(String, Regex)>,
}

impl TagKeywords {
    /// Создать список ключевых слов
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))
                .map_err(|e| Error::Config(format!("invalid keyword '{keyword}': {e}")))?;
            patterns.push((keyword, pattern));
        }

        Ok(Self { patterns })
    }

    /// Ключевые слова по умолчанию
    pub fn default_english() -> Self {
        Self::new(DEFAULT_KEYWORDS)
            .unwrap_or_else(|_| unreachable!("default keywords are valid patterns"))
    }

    /// Найти ключевые слова в тексте (текст уже в нижнем регистре)
    ///
    /// Каждое слово попадает в результат не более одного раза,
    /// в порядке исходного списка.
    pub fn find_in(&self, lowercased: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(lowercased))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }
}

impl Default for TagKeywords {
    fn default() -> Self {
        Self::default_english()
    }
}
