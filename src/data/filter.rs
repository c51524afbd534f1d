use std::fmt;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter key: which continent is selected
// ---------------------------------------------------------------------------

/// Selector value. `All` is the sentinel shown first in the continent list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterKey {
    #[default]
    All,
    Continent(String),
}

impl FilterKey {
    pub const ALL_LABEL: &'static str = "all";

    /// Parse a selector value. Both `"all"` and `"all-continents"` mean every
    /// continent; anything else names one.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "all" | "all-continents" => FilterKey::All,
            other => FilterKey::Continent(other.to_string()),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Continent(name) => record.continent == *name,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => write!(f, "{}", Self::ALL_LABEL),
            FilterKey::Continent(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Current selector + cutoff pair, updated only by user actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filter: FilterKey,
    pub cutoff: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterKey::All,
            cutoff: 0.0,
        }
    }
}

/// Parse the cutoff text box from its leading number, so `"10%"` reads as 10.
/// Input without a leading number yields NaN, which no record passes.
pub fn parse_cutoff(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim_start());
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`
/// or `[+-]Infinity`. Empty when there is no digit before any exponent.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return &s[..end + "Infinity".len()];
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Both metrics must reach the cutoff. Any NaN (value or cutoff) fails.
pub fn passes_cutoff(record: &Record, cutoff: f64) -> bool {
    record.value_a >= cutoff && record.value_b >= cutoff
}

/// Indices of records passing the filter, in dataset order.
pub fn visible_indices(dataset: &Dataset, filter: &FilterKey, cutoff: f64) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filter.matches(rec) && passes_cutoff(rec, cutoff))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new("A", "X", 10.0, 20.0),
            Record::new("B", "Y", 5.0, 5.0),
            Record::new("C", "X", 30.0, 7.0),
            Record::new("D", "Y", f64::NAN, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn all_with_zero_cutoff_keeps_numeric_rows_in_order() {
        let ds = dataset();
        assert_eq!(visible_indices(&ds, &FilterKey::All, 0.0), vec![0, 1, 2]);
    }

    #[test]
    fn cutoff_excludes_when_either_value_is_below() {
        let ds = dataset();
        for cutoff in [0.0, 5.0, 6.0, 7.0, 7.5, 10.0, 20.0, 21.0] {
            let visible = visible_indices(&ds, &FilterKey::All, cutoff);
            for (i, rec) in ds.records.iter().enumerate() {
                let excluded = rec.value_a < cutoff
                    || rec.value_b < cutoff
                    || rec.value_a.is_nan()
                    || rec.value_b.is_nan();
                assert_eq!(visible.contains(&i), !excluded, "cutoff {cutoff}, row {i}");
            }
        }
    }

    #[test]
    fn continent_filter_is_subset_of_all() {
        let ds = dataset();
        for cutoff in [0.0, 6.0, 10.0] {
            let all = visible_indices(&ds, &FilterKey::All, cutoff);
            let x = visible_indices(&ds, &FilterKey::parse("X"), cutoff);
            assert!(x.iter().all(|i| all.contains(i)));
            assert!(x.iter().all(|&i| ds.records[i].continent == "X"));
        }
    }

    #[test]
    fn unknown_continent_yields_nothing() {
        let ds = dataset();
        assert!(visible_indices(&ds, &FilterKey::parse("Atlantis"), 0.0).is_empty());
    }

    #[test]
    fn nan_cutoff_hides_everything() {
        let ds = dataset();
        let cutoff = parse_cutoff("abc");
        assert!(cutoff.is_nan());
        assert!(visible_indices(&ds, &FilterKey::All, cutoff).is_empty());
    }

    #[test]
    fn cutoff_reads_the_leading_number() {
        assert_eq!(parse_cutoff("10%"), 10.0);
        assert_eq!(parse_cutoff("7abc"), 7.0);
        assert_eq!(parse_cutoff("  5 apples"), 5.0);
        assert_eq!(parse_cutoff("-2.5"), -2.5);
        assert_eq!(parse_cutoff(".5x"), 0.5);
        assert_eq!(parse_cutoff("1e2%"), 100.0);
        assert_eq!(parse_cutoff("3e"), 3.0);
        assert_eq!(parse_cutoff("Infinity"), f64::INFINITY);
    }

    #[test]
    fn cutoff_without_leading_number_is_nan() {
        assert!(parse_cutoff("").is_nan());
        assert!(parse_cutoff("abc").is_nan());
        assert!(parse_cutoff("%10").is_nan());
        assert!(parse_cutoff(".").is_nan());
        assert!(parse_cutoff("-").is_nan());
        assert!(parse_cutoff("inf").is_nan());
    }

    #[test]
    fn parse_accepts_both_all_sentinels() {
        assert_eq!(FilterKey::parse("all"), FilterKey::All);
        assert_eq!(FilterKey::parse("all-continents"), FilterKey::All);
        assert_eq!(
            FilterKey::parse("Europe"),
            FilterKey::Continent("Europe".into())
        );
        assert_eq!(FilterKey::All.to_string(), "all");
    }
}
