//! `years` and `summary` subcommands.

use crate::load::load_store;
use rain_store::{DataStore, YearSummary};
use rain_utils::dates::format_date;
use rain_utils::numbers::format_value;

/// One year per line, ascending.
pub fn years_report(store: &DataStore) -> String {
    store
        .available_years()
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary_line(s: &YearSummary) -> String {
    format!(
        "{}: {} mm total, {} rainy of {} days, max {} mm on {}",
        s.year,
        format_value(s.total),
        s.rainy_days,
        s.days,
        format_value(s.max_value),
        format_date(&s.max_date)
    )
}

/// Summary lines for `year`, or for every year when `None`.
pub fn summary_report(store: &DataStore, year: Option<i32>) -> anyhow::Result<String> {
    let years = match year {
        Some(y) => vec![y],
        None => store.available_years(),
    };
    let lines = years
        .into_iter()
        .map(|y| store.summary(y).map(|s| summary_line(&s)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

pub async fn run_years(input: &str) -> anyhow::Result<()> {
    let store = load_store(input).await?;
    println!("{}", years_report(&store));
    Ok(())
}

pub async fn run_summary(input: &str, year: Option<i32>) -> anyhow::Result<()> {
    let store = load_store(input).await?;
    println!("{}", summary_report(&store, year)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rain_store::DailyRecord;

    fn store() -> DataStore {
        let mut store = DataStore::new();
        store
            .ingest(&[
                DailyRecord::new(2018, 0, 1, 5.0),
                DailyRecord::new(2018, 0, 2, -3.0),
                DailyRecord::new(2016, 6, 4, 12.5),
            ])
            .unwrap();
        store
    }

    #[test]
    fn years_are_listed_ascending() {
        assert_eq!(years_report(&store()), "2016\n2018");
    }

    #[test]
    fn summary_for_one_year() {
        let report = summary_report(&store(), Some(2018)).unwrap();
        assert_eq!(report, "2018: 5 mm total, 1 rainy of 2 days, max 5 mm on 2018-01-01");
    }

    #[test]
    fn summary_for_all_years() {
        let report = summary_report(&store(), None).unwrap();
        assert_eq!(report.lines().count(), 2);
        assert!(report.starts_with("2016: 12.5 mm total"));
    }

    #[test]
    fn summary_for_missing_year_fails() {
        assert!(summary_report(&store(), Some(1999)).is_err());
    }
}
