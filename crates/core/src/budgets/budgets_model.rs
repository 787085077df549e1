//! Budget domain models.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing the total allocation for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Calendar month this budget covers, formatted as `YYYYMM`.
    pub year_month: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(year_month: impl Into<String>, amount: Decimal) -> Self {
        Budget {
            year_month: year_month.into(),
            amount,
        }
    }

    /// First calendar day of the month this budget covers.
    ///
    /// Fails with a validation error when `year_month` is not six ASCII
    /// digits or does not encode a real month.
    pub fn first_day(&self) -> Result<NaiveDate> {
        if self.year_month.len() != 6 || !self.year_month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "budget month '{}' is not in YYYYMM format",
                self.year_month
            ))));
        }
        let date = NaiveDate::parse_from_str(&format!("{}01", self.year_month), "%Y%m%d")?;
        Ok(date)
    }

    /// Last calendar day of the month this budget covers.
    pub fn last_day(&self) -> Result<NaiveDate> {
        let first = self.first_day()?;
        first
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.checked_sub_days(Days::new(1)))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "budget month '{}' is out of the supported date range",
                    self.year_month
                )))
            })
    }

    /// Number of days in the budget's month (28, 29, 30 or 31).
    pub fn days_in_month(&self) -> Result<i64> {
        Ok((self.last_day()? - self.first_day()?).num_days() + 1)
    }

    /// Amount apportioned to a single day of the budget's month,
    /// using exact decimal division.
    pub fn daily_amount(&self) -> Result<Decimal> {
        Ok(self.amount / Decimal::from(self.days_in_month()?))
    }
}
