use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSet {
    years: BTreeSet<i32>,
}

impl YearSet {
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    pub(crate) fn matches_in(&self, file_name: &str) -> Vec<i32> {
        self.years
            .iter()
            .copied()
            .filter(|year| file_name.contains(&year.to_string()))
            .collect()
    }
}

impl Default for YearSet {
    fn default() -> Self {
        Self {
            years: (2019..=2024).collect(),
        }
    }
}

fn validated_year(value: i32) -> Result<i32, String> {
    if (1000..=9999).contains(&value) {
        Ok(value)
    } else {
        Err(format!("recognized years must be 4-digit, got '{value}'"))
    }
}

impl FromStr for YearSet {
    type Err = String;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut years = BTreeSet::new();
        for token in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if let Some((start, end)) = token.split_once('-') {
                let start: i32 = start
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid year range start: '{start}'"))?;
                let end: i32 = end
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid year range end: '{end}'"))?;
                if end < start {
                    return Err(format!(
                        "invalid range '{token}': end is smaller than start"
                    ));
                }
                for year in start..=end {
                    years.insert(validated_year(year)?);
                }
            } else {
                let year: i32 = token
                    .parse()
                    .map_err(|_| format!("invalid year: '{token}'"))?;
                years.insert(validated_year(year)?);
            }
        }

        if years.is_empty() {
            return Err("year set cannot be empty".to_string());
        }

        Ok(Self { years })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    pub county: String,
    pub years: YearSet,
    pub delimiter: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            county: "St. Louis".to_string(),
            years: YearSet::default(),
            delimiter: b',',
        }
    }
}

impl ExtractOptions {
    pub(crate) fn county_needle(&self) -> String {
        self.county.trim().to_lowercase()
    }

    pub(crate) fn county_caption(&self) -> String {
        let needle = self.county_needle();
        if needle.ends_with(" county") {
            needle
        } else {
            format!("{needle} county")
        }
    }
}
