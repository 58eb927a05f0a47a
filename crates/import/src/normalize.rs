//! Canonical forms of payment narrations.
//!
//! Light normalization removes the parts that change from one otherwise
//! identical payment to the next (reference numbers, dates, VAT clauses,
//! amounts, percentages). Aggressive normalization reduces the result to
//! bare content words for token-set comparison.

use std::sync::OnceLock;

use regex::Regex;

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Currency suffix shared by the VAT and amount patterns.
macro_rules! rub {
    () => {
        r"(?:рубл[а-яё]*|руб\b\.?|р\.|₽)"
    };
}

re!(re_doc_ref,
    r"(?:(?:спецификаци|договор|сч[её]т)[а-яё]*\s*)?№(?:\s*[\w\-/]*\d[\w\-/]*)?");
re!(re_date,
    r"(?:\bот\s*)?\d{1,2}[./\-]\d{1,2}[./\-]\d{2,4}(?:\s*г(?:ода|г)?\b\.?)?");
re!(re_vat, concat!(
    r"(?:\bбез\s+налога\s*\(?\s*ндс\s*\)?",
    r"|(?:\bв\s*т\.?\s*ч\.?\s*|\bв\s+том\s+числе\s+|\bвключая\s+|\bбез\s+|\bсумма\s+)?",
    r"\bндс\b(?:\s*не\s+(?:облагается|предусмотрен))?",
    r"(?:\s*\(?\s*\d+(?:[.,]\d+)?\s*%\s*\)?)?",
    r"(?:\s*[-:=]?\s*\d[\d\s]*(?:[.,]\d{1,2})?(?:\s*", rub!(), r")?)?)"));
re!(re_percent,
    r"\d+(?:[.,]\d+)?\s*%");
re!(re_amount, concat!(
    r"\d[\d\s]*(?:[.,]\d{1,2})?\s*", rub!(), r"(?:\s*\d{1,2}\s*коп[а-яё]*\.?)?"));

/// Prepositions, conjunctions and payment boilerplate that say nothing about
/// what was paid for.
const STOP_WORDS: &[&str] = &[
    "а", "и", "или", "но", "да", "в", "во", "на", "по", "от", "до", "за", "из", "к", "ко", "с",
    "со", "у", "о", "об", "обо", "при", "для", "без", "через", "под", "над", "про", "г", "т",
    "ч", "n", "no", "оплата", "оплату", "оплаты", "оплате", "счет", "счёт", "счета", "счету",
    "счетам", "счетов", "договор", "договора", "договору", "договоров", "перечисление",
    "перечисления", "перечисляем", "согласно", "сумма", "сумму", "том", "числе", "ндс", "руб",
    "рублей", "коп", "прочие",
];

// Each pass only removes text, so a handful of passes always converges.
const MAX_PASSES: usize = 8;

/// Light normalization: lower-case, strip variable parts, fold whitespace.
/// Idempotent; missing or empty input yields an empty string.
pub fn normalize_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let mut current = light_pass(text);
    for _ in 0..MAX_PASSES {
        let next = light_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn light_pass(text: &str) -> String {
    let mut s = text.to_lowercase();
    for re in [re_doc_ref(), re_date(), re_vat(), re_percent(), re_amount()] {
        if re.is_match(&s) {
            s = re.replace_all(&s, " ").into_owned();
        }
    }
    collapse_whitespace(&s)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Aggressive normalization on top of [`normalize_text`]: drops tokens with
/// digits, splits on punctuation and removes stop words.
pub fn normalize_text_aggressive(text: Option<&str>) -> String {
    let light = normalize_text(text);
    let mut words: Vec<String> = Vec::new();
    for token in light.split_whitespace() {
        if token.chars().any(char::is_numeric) {
            continue;
        }
        let cleaned: String = token
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();
        words.extend(
            cleaned
                .split_whitespace()
                .filter(|w| !STOP_WORDS.contains(w))
                .map(str::to_string),
        );
    }
    words.join(" ")
}
