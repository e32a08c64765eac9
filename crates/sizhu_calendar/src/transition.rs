//! Month-transition (solar-term boundary) table.
//!
//! External reference data: for each Gregorian (year, month), the
//! day-of-month on which the governing pillar month changes. Supplied as CSV
//! with header `year,month_1,...,month_12`, one row per year. Parsed once at
//! startup; lookups are read-only and safe to share across threads.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Transition dates keyed by (Gregorian year, month).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTransitionTable {
    rows: BTreeMap<i32, [NaiveDate; 12]>,
}

impl MonthTransitionTable {
    /// Parse the CSV form of the table.
    ///
    /// The header names a `year` column and `month_1`..`month_12` columns in
    /// any order; every cell under a month column is a day-of-month. Blank
    /// lines are skipped. Duplicate year rows and invalid dates are parse
    /// errors.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| CalendarError::Parse("empty transition table".to_string()))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let year_column = columns
            .iter()
            .position(|&c| c == "year")
            .ok_or_else(|| CalendarError::Parse("header missing 'year' column".to_string()))?;
        let mut month_columns = [0usize; 12];
        for (m, slot) in month_columns.iter_mut().enumerate() {
            let name = format!("month_{}", m + 1);
            *slot = columns.iter().position(|&c| c == name).ok_or_else(|| {
                CalendarError::Parse(format!("header missing '{name}' column"))
            })?;
        }

        let mut rows = BTreeMap::new();
        for (index, line) in lines {
            let lineno = index + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != columns.len() {
                return Err(CalendarError::Parse(format!(
                    "line {lineno}: expected {} fields, found {}",
                    columns.len(),
                    fields.len()
                )));
            }
            let year: i32 = fields[year_column].parse().map_err(|_| {
                CalendarError::Parse(format!("line {lineno}: bad year '{}'", fields[year_column]))
            })?;
            let mut dates = [NaiveDate::MIN; 12];
            for (m, date) in dates.iter_mut().enumerate() {
                let cell = fields[month_columns[m]];
                let day: u32 = cell.parse().map_err(|_| {
                    CalendarError::Parse(format!("line {lineno}: bad day '{cell}'"))
                })?;
                *date = NaiveDate::from_ymd_opt(year, m as u32 + 1, day).ok_or_else(|| {
                    CalendarError::Parse(format!(
                        "line {lineno}: invalid date {year}-{:02}-{day:02}",
                        m + 1
                    ))
                })?;
            }
            if rows.insert(year, dates).is_some() {
                return Err(CalendarError::Parse(format!("line {lineno}: duplicate year {year}")));
            }
        }

        Ok(Self { rows })
    }

    /// Transition date for (year, month), 1-based month.
    pub fn transition_date(&self, year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MissingTransition { year, month });
        }
        self.rows
            .get(&year)
            .map(|dates| dates[(month - 1) as usize])
            .ok_or(CalendarError::MissingTransition { year, month })
    }

    /// Number of year rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
year,month_1,month_2,month_3,month_4,month_5,month_6,month_7,month_8,month_9,month_10,month_11,month_12
1999,6,4,6,5,6,6,7,8,8,9,8,7
2000,6,4,5,4,5,5,7,7,7,8,7,7
";

    #[test]
    fn parses_and_looks_up() {
        let table = MonthTransitionTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.transition_date(2000, 1).unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 6).unwrap()
        );
        assert_eq!(
            table.transition_date(1999, 12).unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 7).unwrap()
        );
    }

    #[test]
    fn missing_year_is_lookup_error() {
        let table = MonthTransitionTable::parse(SAMPLE).unwrap();
        assert_eq!(
            table.transition_date(1980, 3),
            Err(CalendarError::MissingTransition { year: 1980, month: 3 })
        );
    }

    #[test]
    fn month_out_of_range_is_lookup_error() {
        let table = MonthTransitionTable::parse(SAMPLE).unwrap();
        assert!(matches!(
            table.transition_date(2000, 13),
            Err(CalendarError::MissingTransition { year: 2000, month: 13 })
        ));
    }

    #[test]
    fn header_columns_may_reorder() {
        let text = "\
month_12,month_11,month_10,month_9,month_8,month_7,month_6,month_5,month_4,month_3,month_2,month_1,year
7,7,8,7,7,7,5,5,4,5,4,6,2000
";
        let table = MonthTransitionTable::parse(text).unwrap();
        assert_eq!(
            table.transition_date(2000, 12).unwrap(),
            NaiveDate::from_ymd_opt(2000, 12, 7).unwrap()
        );
    }

    #[test]
    fn rejects_missing_column() {
        let text = "year,month_1\n2000,6\n";
        assert!(matches!(
            MonthTransitionTable::parse(text),
            Err(CalendarError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_day() {
        let text = "\
year,month_1,month_2,month_3,month_4,month_5,month_6,month_7,month_8,month_9,month_10,month_11,month_12
2000,6,31,5,4,5,5,7,7,7,8,7,7
";
        // Feb 31 is not a date.
        assert!(matches!(MonthTransitionTable::parse(text), Err(CalendarError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_year() {
        let text = "\
year,month_1,month_2,month_3,month_4,month_5,month_6,month_7,month_8,month_9,month_10,month_11,month_12
2000,6,4,5,4,5,5,7,7,7,8,7,7
2000,6,4,5,4,5,5,7,7,7,8,7,7
";
        assert!(matches!(MonthTransitionTable::parse(text), Err(CalendarError::Parse(_))));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(MonthTransitionTable::parse(""), Err(CalendarError::Parse(_))));
    }
}
