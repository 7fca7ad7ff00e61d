//! Month separator paths.
//!
//! A month that starts on a Monday is separated from the previous one by a
//! straight vertical line. Any other start leaves the boundary week shared
//! between two months, so the separator steps one column left at the row
//! where the new month begins:
//!
//! ```text
//!   col: w   w+1
//!        .  |.        rows above the step belong to the old month
//!        .  |.
//!        +--+         step at row = weekday of the 1st
//!        |. .         rows below belong to the new month
//!        |. .
//! ```

use crate::mapper::{week_of, weekday_of, DAYS_PER_WEEK};
use chrono::NaiveDate;
use rain_records::DataPoint;
use rain_utils::dates::month_starts_after;
use serde::Serialize;
use std::fmt::Write;

/// A path vertex, already scaled by the cell unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

/// Separator drawn in front of the month starting at `month_start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPath {
    pub month_start: NaiveDate,
    pub points: Vec<GridPoint>,
    /// SVG path data for `points`.
    pub d: String,
}

/// Separator for the month starting at `month_start`.
pub fn boundary_path(month_start: NaiveDate, cell_unit: f64) -> MonthPath {
    let week = week_of(&month_start) as f64;
    let weekday = weekday_of(&month_start) as f64;
    let rows = DAYS_PER_WEEK as f64;

    let grid = if weekday == 0.0 {
        vec![(week, 0.0), (week, rows)]
    } else {
        vec![
            (week + 1.0, 0.0),
            (week + 1.0, weekday),
            (week, weekday),
            (week, rows),
        ]
    };
    let points: Vec<GridPoint> = grid
        .into_iter()
        .map(|(col, row)| GridPoint {
            x: col * cell_unit,
            y: row * cell_unit,
        })
        .collect();
    let d = svg_path_data(&points);
    MonthPath {
        month_start,
        points,
        d,
    }
}

/// Separators for every month transition inside the ordered `points`.
///
/// The first month in range gets no separator. Returns nothing for an
/// empty slice.
pub fn month_boundaries(points: &[DataPoint], cell_unit: f64) -> Vec<MonthPath> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    month_starts_after(first.date, last.date)
        .map(|t| boundary_path(t, cell_unit))
        .collect()
}

/// Render vertices as `M x,y` followed by `V`/`H`/`L` commands.
fn svg_path_data(points: &[GridPoint]) -> String {
    let mut d = String::new();
    let mut previous: Option<GridPoint> = None;
    for p in points {
        // Writing into a String cannot fail.
        let _ = match previous {
            None => write!(d, "M{},{}", p.x, p.y),
            Some(prev) if prev.x == p.x => write!(d, "V{}", p.y),
            Some(prev) if prev.y == p.y => write!(d, "H{}", p.x),
            Some(_) => write!(d, "L{},{}", p.x, p.y),
        };
        previous = Some(*p);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_points(year: i32) -> Vec<DataPoint> {
        date(year, 1, 1)
            .iter_days()
            .take_while(|d| chrono::Datelike::year(d) == year)
            .map(|date| DataPoint { date, value: 0.0 })
            .collect()
    }

    #[test]
    fn test_monday_start_is_straight() {
        // 2018-10-01 is a Monday in week 39.
        let path = boundary_path(date(2018, 10, 1), 1.0);
        assert_eq!(
            path.points,
            vec![GridPoint { x: 39.0, y: 0.0 }, GridPoint { x: 39.0, y: 7.0 }]
        );
        assert_eq!(path.d, "M39,0V7");
    }

    #[test]
    fn test_midweek_start_steps_left() {
        // 2018-02-01 is a Thursday (row 3) in week 4.
        let path = boundary_path(date(2018, 2, 1), 1.0);
        assert_eq!(
            path.points,
            vec![
                GridPoint { x: 5.0, y: 0.0 },
                GridPoint { x: 5.0, y: 3.0 },
                GridPoint { x: 4.0, y: 3.0 },
                GridPoint { x: 4.0, y: 7.0 },
            ]
        );
        assert_eq!(path.d, "M5,0V3H4V7");
    }

    #[test]
    fn test_cell_unit_scales_coordinates() {
        let path = boundary_path(date(2018, 2, 1), 12.0);
        assert_eq!(path.d, "M60,0V36H48V84");
        assert_eq!(path.month_start, date(2018, 2, 1));
    }

    #[test]
    fn test_full_year_has_eleven_boundaries() {
        let paths = month_boundaries(&year_points(2018), 1.0);
        assert_eq!(paths.len(), 11);
        assert_eq!(paths[0].month_start, date(2018, 2, 1));
        assert_eq!(paths[10].month_start, date(2018, 12, 1));
        // Boundaries move right through the year.
        for pair in paths.windows(2) {
            assert!(pair[0].points[0].x <= pair[1].points[0].x);
        }
    }

    #[test]
    fn test_range_starting_on_first_of_month_has_no_leading_boundary() {
        let points: Vec<DataPoint> = year_points(2018)
            .into_iter()
            .filter(|p| p.date >= date(2018, 3, 1) && p.date <= date(2018, 4, 10))
            .collect();
        let paths = month_boundaries(&points, 1.0);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].month_start, date(2018, 4, 1));
    }

    #[test]
    fn test_single_month_and_empty_input() {
        let points: Vec<DataPoint> = year_points(2018).into_iter().take(31).collect();
        assert!(month_boundaries(&points, 1.0).is_empty());
        assert!(month_boundaries(&[], 1.0).is_empty());
    }

    /// x of the vertical segment of `path` covering grid row `row`.
    fn separator_x(path: &MonthPath, row: u32) -> f64 {
        let (top, bottom) = (row as f64, row as f64 + 1.0);
        path.points
            .windows(2)
            .find(|seg| {
                let (a, b) = (seg[0], seg[1]);
                a.x == b.x && a.y.min(b.y) <= top && a.y.max(b.y) >= bottom
            })
            .map(|seg| seg[0].x)
            .unwrap()
    }

    #[test]
    fn test_boundaries_separate_months() {
        for year in 2015..=2024 {
            let points = year_points(year);
            for path in month_boundaries(&points, 1.0) {
                let new_month = path.month_start;
                let old_month = new_month.pred_opt().unwrap();
                for p in &points {
                    let cell = crate::mapper::coordinate_of(&p.date);
                    let x = separator_x(&path, cell.weekday);
                    let (left, right) = (cell.week as f64, cell.week as f64 + 1.0);
                    let same_month = |d: NaiveDate| {
                        chrono::Datelike::month(&p.date) == chrono::Datelike::month(&d)
                    };
                    if same_month(old_month) {
                        assert!(right <= x, "{} is right of the {} separator", p.date, new_month);
                    } else if same_month(new_month) {
                        assert!(left >= x, "{} is left of the {} separator", p.date, new_month);
                    }
                }
            }
        }
    }

    #[test]
    fn test_step_row_matches_weekday() {
        for path in month_boundaries(&year_points(2019), 1.0) {
            let weekday = weekday_of(&path.month_start) as f64;
            if weekday == 0.0 {
                assert_eq!(path.points.len(), 2);
            } else {
                assert_eq!(path.points.len(), 4);
                assert_eq!(path.points[1].y, weekday);
                assert_eq!(path.points[0].x - path.points[3].x, 1.0);
            }
            assert_eq!(path.points.last().unwrap().y, 7.0);
        }
    }
}
