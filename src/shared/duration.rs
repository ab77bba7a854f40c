use std::fmt::Display;

/// Unit a route duration is expressed in. Feeds and filters only ever deal in
/// hours and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationUnit {
    #[default]
    Hours,
    Days,
}

impl DurationUnit {
    /// Resolves a raw unit word to its canonical unit. Feeds mix languages and
    /// spellings ("hrs", "timmar", "day"), so this accepts the known aliases.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "hour" | "hours" | "hr" | "hrs" | "h" | "timme" | "timmar" => Some(Self::Hours),
            "day" | "days" | "d" | "dag" | "dagar" => Some(Self::Days),
            _ => None,
        }
    }
}

/// A route's travel time: a quantity plus the unit it was written in.
///
/// Catalog feeds carry durations as human text ("3 hours", "2 days"). Parsing
/// happens once at ingestion; filtering converts between units on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteDuration {
    value: f64,
    unit: DurationUnit,
}

impl RouteDuration {
    pub const fn new(value: f64, unit: DurationUnit) -> Self {
        Self { value, unit }
    }

    pub const fn from_hours(hours: f64) -> Self {
        Self::new(hours, DurationUnit::Hours)
    }

    pub const fn from_days(days: f64) -> Self {
        Self::new(days, DurationUnit::Days)
    }

    /// Parses a human duration string: a quantity followed by a unit word,
    /// either separated ("3 hours") or glued ("3h"). Returns None when no
    /// quantity/unit pair can be read or the quantity is negative or
    /// non-finite.
    pub fn parse(text: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let first = tokens.next()?;

        let (quantity, unit): (f64, _) = match tokens.next() {
            Some(second) => (first.parse().ok()?, DurationUnit::from_alias(second)?),
            None => {
                // Glued form: digits up to the first alphabetic character.
                let split = first.find(|c: char| c.is_alphabetic())?;
                let (digits, word) = first.split_at(split);
                (digits.parse().ok()?, DurationUnit::from_alias(word)?)
            }
        };

        // f64's parser accepts "nan" and "inf", which no real feed cell means.
        if tokens.next().is_some() || quantity < 0.0 || !quantity.is_finite() {
            return None;
        }
        Some(Self::new(quantity, unit))
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn as_hours(&self) -> f64 {
        match self.unit {
            DurationUnit::Hours => self.value,
            DurationUnit::Days => self.value * 24.0,
        }
    }

    /// Whole-day span covered by this duration: `(floor, ceil)` of the exact
    /// day count. A 25-hour route spans its second day but only completes one,
    /// so it reads as `(1, 2)`; exact multiples of a day collapse to a single
    /// value. Day-denominated durations are already whole spans.
    pub fn day_span(&self) -> (f64, f64) {
        match self.unit {
            DurationUnit::Days => (self.value, self.value),
            DurationUnit::Hours => {
                let days = self.value / 24.0;
                (days.floor(), days.ceil())
            }
        }
    }
}

impl Display for RouteDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match (self.unit, self.value == 1.0) {
            (DurationUnit::Hours, true) => "hour",
            (DurationUnit::Hours, false) => "hours",
            (DurationUnit::Days, true) => "day",
            (DurationUnit::Days, false) => "days",
        };
        if self.value.fract() == 0.0 {
            write!(f, "{} {}", self.value as i64, unit)
        } else {
            write!(f, "{} {}", self.value, unit)
        }
    }
}

#[test]
fn parse_hours() {
    let duration = RouteDuration::parse("3 hours").unwrap();
    assert_eq!(duration.value(), 3.0);
    assert_eq!(duration.unit(), DurationUnit::Hours);
}

#[test]
fn parse_single_day() {
    let duration = RouteDuration::parse("1 day").unwrap();
    assert_eq!(duration.value(), 1.0);
    assert_eq!(duration.unit(), DurationUnit::Days);
}

#[test]
fn parse_glued_unit() {
    let duration = RouteDuration::parse("5h").unwrap();
    assert_eq!(duration.value(), 5.0);
    assert_eq!(duration.unit(), DurationUnit::Hours);
}

#[test]
fn parse_fractional_quantity() {
    let duration = RouteDuration::parse("1.5 hours").unwrap();
    assert_eq!(duration.value(), 1.5);
}

#[test]
fn parse_swedish_unit() {
    let duration = RouteDuration::parse("2 dagar").unwrap();
    assert_eq!(duration.unit(), DurationUnit::Days);
}

#[test]
fn parse_rejects_missing_unit() {
    assert!(RouteDuration::parse("3").is_none());
}

#[test]
fn parse_rejects_unknown_unit() {
    assert!(RouteDuration::parse("3 weeks").is_none());
}

#[test]
fn parse_rejects_empty() {
    assert!(RouteDuration::parse("").is_none());
}

#[test]
fn parse_rejects_trailing_tokens() {
    assert!(RouteDuration::parse("3 hours walk").is_none());
}

#[test]
fn parse_rejects_negative() {
    assert!(RouteDuration::parse("-2 hours").is_none());
}

#[test]
fn parse_rejects_non_finite() {
    assert!(RouteDuration::parse("nan hours").is_none());
    assert!(RouteDuration::parse("inf hours").is_none());
    assert!(RouteDuration::parse("-inf days").is_none());
    assert!(RouteDuration::parse("1e999 hours").is_none());
}

#[test]
fn hours_convert_exactly_to_days_worth() {
    let duration = RouteDuration::from_days(2.0);
    assert_eq!(duration.as_hours(), 48.0);
}

#[test]
fn day_span_of_exact_day() {
    assert_eq!(RouteDuration::from_hours(24.0).day_span(), (1.0, 1.0));
}

#[test]
fn day_span_of_partial_day() {
    assert_eq!(RouteDuration::from_hours(25.0).day_span(), (1.0, 2.0));
}

#[test]
fn day_span_below_one_day() {
    assert_eq!(RouteDuration::from_hours(23.0).day_span(), (0.0, 1.0));
}

#[test]
fn display_singular_and_plural() {
    assert_eq!(RouteDuration::from_hours(1.0).to_string(), "1 hour");
    assert_eq!(RouteDuration::from_days(2.0).to_string(), "2 days");
    assert_eq!(RouteDuration::from_hours(1.5).to_string(), "1.5 hours");
}
