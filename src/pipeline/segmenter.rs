//! Сегментация текста на предложения
//!
//! Правило границы: фрагмент заканчивается на серии символов
//! `.`, `!`, `?`, за которой следует пробельный символ или конец
//! текста. Терминатор остаётся в составе фрагмента, поэтому
//! "3.14" не разрезается посередине числа.

/// Сегментатор текста
///
/// Детерминированный и перезапускаемый: повторный запуск на том же
/// входе даёт ту же последовательность фрагментов.
#[derive(Debug, Clone, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Создать сегментатор
    pub fn new() -> Self {
        Self
    }

    /// Разбить текст на упорядоченные непустые фрагменты
    ///
    /// Фрагменты, пустые после обрезки пробелов, отбрасываются;
    /// порядок остальных сохраняется.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut units = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            if is_terminator(c) {
                // Поглощаем всю серию терминаторов ("?!", "...")
                while let Some(&next) = chars.peek() {
                    if is_terminator(next) {
                        current.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                // Граница только перед пробелом или концом текста
                let at_boundary = match chars.peek() {
                    Some(&next) => next.is_whitespace(),
                    None => true,
                };

                if at_boundary {
                    push_unit(&mut units, &current);
                    current.clear();
                }
            }
        }

        push_unit(&mut units, &current);

        units
    }
}

/// Символ-терминатор предложения
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Добавить фрагмент, если после обрезки он непустой
fn push_unit(units: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        units.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let segmenter = Segmenter::new();
        let units = segmenter.segment("This is great. That was bad! Warning: disk error.");

        assert_eq!(
            units,
            vec![
                "This is great.",
                "That was bad!",
                "Warning: disk error.",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::new();

        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_no_terminator() {
        let segmenter = Segmenter::new();
        let units = segmenter.segment("  just one chunk without ending  ");

        assert_eq!(units, vec!["just one chunk without ending"]);
    }

    #[test]
    fn test_consecutive_terminators() {
        let segmenter = Segmenter::new();
        let units = segmenter.segment("Really?! Yes... Fine.");

        assert_eq!(units, vec!["Really?!", "Yes...", "Fine."]);
    }

    #[test]
    fn test_decimal_number_not_split() {
        let segmenter = Segmenter::new();
        let units = segmenter.segment("Pi is 3.14 exactly. Next sentence.");

        assert_eq!(units, vec!["Pi is 3.14 exactly.", "Next sentence."]);
    }

    #[test]
    fn test_restartable() {
        let segmenter = Segmenter::new();
        let units = segmenter.segment("One. Two! Three?");

        // Повторная сегментация склеенного вывода даёт те же фрагменты
        let rejoined = units.join(" ");
        assert_eq!(segmenter.segment(&rejoined), units);

        // И каждый фрагмент по отдельности сегментируется в самого себя
        for unit in &units {
            assert_eq!(segmenter.segment(unit), vec![unit.clone()]);
        }
    }
}
