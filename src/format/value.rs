use serde::{Deserialize, Serialize};

/// Highest decimal precision accepted for labels.
pub const MAX_PRECISION: u8 = 17;

/// Display unit scaling applied before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DisplayUnits {
    /// Picks a unit from a reference magnitude (usually the scale maximum).
    #[default]
    Auto,
    None,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl DisplayUnits {
    /// Replaces `Auto` with a concrete unit chosen from `reference`.
    #[must_use]
    pub fn resolve(self, reference: f64) -> Self {
        if self != Self::Auto {
            return self;
        }
        let magnitude = if reference.is_finite() {
            reference.abs()
        } else {
            0.0
        };
        if magnitude >= 1e12 {
            Self::Trillions
        } else if magnitude >= 1e9 {
            Self::Billions
        } else if magnitude >= 1e6 {
            Self::Millions
        } else if magnitude >= 1e3 {
            Self::Thousands
        } else {
            Self::None
        }
    }

    #[must_use]
    pub fn divisor(self) -> f64 {
        match self {
            Self::Auto | Self::None => 1.0,
            Self::Thousands => 1e3,
            Self::Millions => 1e6,
            Self::Billions => 1e9,
            Self::Trillions => 1e12,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Auto | Self::None => "",
            Self::Thousands => "K",
            Self::Millions => "M",
            Self::Billions => "bn",
            Self::Trillions => "T",
        }
    }
}

/// Locale/unit-aware numeric formatting consumed by the converter and layout.
pub trait ValueFormatter: Send + Sync {
    fn format(
        &self,
        value: f64,
        format_string: Option<&str>,
        precision: Option<u8>,
        display_units: DisplayUnits,
    ) -> String;
}

/// Formatter understanding the common subset of Excel-style format strings:
/// `0`, `0.00`, `#,0.0`, `0%`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct FormatPattern {
    decimals: Option<u8>,
    grouping: bool,
    percent: bool,
}

fn parse_format_string(input: &str) -> FormatPattern {
    let mut pattern = FormatPattern::default();
    let mut in_quotes = false;
    let mut after_point = false;
    let mut decimals = 0u8;
    for c in input.chars() {
        match c {
            '"' | '\'' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            ',' if !after_point => pattern.grouping = true,
            '%' => pattern.percent = true,
            '.' => after_point = true,
            '0' | '#' if after_point => decimals = decimals.saturating_add(1),
            ';' => break,
            _ => {}
        }
    }
    if after_point || input.contains('0') || input.contains('#') {
        pattern.decimals = Some(decimals);
    }
    pattern
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl ValueFormatter for DefaultValueFormatter {
    fn format(
        &self,
        value: f64,
        format_string: Option<&str>,
        precision: Option<u8>,
        display_units: DisplayUnits,
    ) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let pattern = format_string.map(parse_format_string).unwrap_or_default();
        let units = display_units.resolve(value);
        let mut scaled = value / units.divisor();
        if pattern.percent {
            scaled *= 100.0;
        }

        let explicit = precision.or(pattern.decimals).map(|p| p.min(MAX_PRECISION));
        let mut text = match explicit {
            Some(decimals) => format!("{:.*}", usize::from(decimals), scaled.abs()),
            None => {
                let rounded = format!("{:.2}", scaled.abs());
                rounded
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_owned()
            }
        };

        if pattern.grouping {
            let (int_part, frac_part) = match text.split_once('.') {
                Some((int_part, frac_part)) => (int_part.to_owned(), Some(frac_part.to_owned())),
                None => (text.clone(), None),
            };
            text = group_thousands(&int_part);
            if let Some(frac_part) = frac_part {
                text.push('.');
                text.push_str(&frac_part);
            }
        }

        let is_zero = text.chars().all(|c| c == '0' || c == '.' || c == ',');
        let sign = if scaled < 0.0 && !is_zero { "-" } else { "" };
        let percent = if pattern.percent { "%" } else { "" };
        format!("{sign}{text}{}{percent}", units.suffix())
    }
}
