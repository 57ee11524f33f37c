//! Date-range presets used by the report and audit screens.

use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::BackofficeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRange {
    Today,
    /// The last `n` days, today included.
    LastDays(u32),
    /// From the first of the current month up to today.
    CurrentMonth,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl DateRange {
    /// Resolves the preset into inclusive `(fechaDesde, fechaHasta)` bounds.
    pub fn resolve(self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), BackofficeError> {
        let (from, to) = match self {
            DateRange::Today => (today, today),
            DateRange::LastDays(0) => {
                return Err(BackofficeError::InvalidInput(
                    "el rango debe cubrir al menos un día".to_string(),
                ))
            }
            DateRange::LastDays(n) => {
                let from = today
                    .checked_sub_days(Days::new(u64::from(n - 1)))
                    .ok_or_else(|| {
                        BackofficeError::InvalidInput("rango de fechas fuera de límites".to_string())
                    })?;
                (from, today)
            }
            DateRange::CurrentMonth => (today.with_day(1).unwrap_or(today), today),
            DateRange::Custom { from, to } => (from, to),
        };
        if from > to {
            return Err(BackofficeError::InvalidInput(format!(
                "la fecha inicial {} es posterior a la fecha final {}",
                from, to
            )));
        }
        Ok((from, to))
    }

    /// Resolves against the local calendar date.
    pub fn resolve_today(self) -> Result<(NaiveDate, NaiveDate), BackofficeError> {
        self.resolve(Local::now().date_naive())
    }
}

impl FromStr for DateRange {
    type Err = BackofficeError;

    /// Accepts `today`, `month`, `<n>d` and `YYYY-MM-DD..YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "today" | "hoy" => return Ok(DateRange::Today),
            "month" | "mes" => return Ok(DateRange::CurrentMonth),
            _ => {}
        }
        if let Some(days) = s.strip_suffix('d') {
            if let Ok(n) = days.parse::<u32>() {
                return Ok(DateRange::LastDays(n));
            }
        }
        if let Some((from, to)) = s.split_once("..") {
            let from = parse_date(from)?;
            let to = parse_date(to)?;
            return Ok(DateRange::Custom { from, to });
        }
        Err(BackofficeError::InvalidInput(format!(
            "rango de fechas no reconocido '{}'. Use today, month, 30d o 2024-01-01..2024-01-31",
            s
        )))
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, BackofficeError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BackofficeError::InvalidInput(format!("fecha inválida '{}', use YYYY-MM-DD", input.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_is_a_single_day() {
        let today = date(2024, 3, 15);
        assert_eq!(DateRange::Today.resolve(today).unwrap(), (today, today));
    }

    #[test]
    fn last_days_includes_today() {
        let today = date(2024, 3, 15);
        assert_eq!(
            DateRange::LastDays(7).resolve(today).unwrap(),
            (date(2024, 3, 9), today)
        );
        assert_eq!(
            DateRange::LastDays(30).resolve(date(2024, 3, 1)).unwrap(),
            (date(2024, 2, 1), date(2024, 3, 1))
        );
        assert!(DateRange::LastDays(0).resolve(today).is_err());
    }

    #[test]
    fn current_month_starts_on_the_first() {
        assert_eq!(
            DateRange::CurrentMonth.resolve(date(2024, 2, 29)).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
    }

    #[test]
    fn inverted_custom_range_is_rejected() {
        let range = DateRange::Custom {
            from: date(2024, 5, 2),
            to: date(2024, 5, 1),
        };
        assert!(matches!(
            range.resolve(date(2024, 6, 1)),
            Err(BackofficeError::InvalidInput(_))
        ));
    }

    #[test]
    fn parses_presets() {
        assert_eq!("today".parse::<DateRange>().unwrap(), DateRange::Today);
        assert_eq!("MES".parse::<DateRange>().unwrap(), DateRange::CurrentMonth);
        assert_eq!("15d".parse::<DateRange>().unwrap(), DateRange::LastDays(15));
        assert_eq!(
            "2024-01-01..2024-01-31".parse::<DateRange>().unwrap(),
            DateRange::Custom {
                from: date(2024, 1, 1),
                to: date(2024, 1, 31)
            }
        );
        assert!("yesterday".parse::<DateRange>().is_err());
        assert!("2024-13-01..2024-01-31".parse::<DateRange>().is_err());
    }
}
