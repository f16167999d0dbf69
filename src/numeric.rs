use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_SUBSTRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9][0-9,]*(?:\.[0-9]*)?").expect("hardcoded numeric regex is valid")
});

pub fn extract_number(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }

    let stripped = raw.replace(['$', '%'], "");
    let matched = NUMERIC_SUBSTRING.find(&stripped)?;
    let digits = matched.as_str().replace(',', "");
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}
