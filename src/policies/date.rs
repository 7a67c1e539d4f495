use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::date_pattern::to_strftime;
use crate::error::{Result, WrapperError};
use crate::field::{Policy, Project};

/// Projects a date in the US `MM-dd-yyyy` format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsDate;

impl UsDate {
    pub const PATTERN: &'static str = "MM-dd-yyyy";
    const STRFTIME: &'static str = "%m-%d-%Y";
}

impl Policy<NaiveDateTime> for UsDate {}
impl Policy<NaiveDate> for UsDate {}

impl Project<NaiveDateTime> for UsDate {
    type Output = String;

    fn project(&self, value: &NaiveDateTime) -> String {
        value.format(Self::STRFTIME).to_string()
    }
}

impl Project<NaiveDate> for UsDate {
    type Output = String;

    fn project(&self, value: &NaiveDate) -> String {
        value.format(Self::STRFTIME).to_string()
    }
}

/// Projects a date using a configurable Unicode date pattern.
///
/// The pattern is validated once, at construction. Formatting can't fail
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormattedDate {
    pattern: String,
    strftime: String,
}

impl FormattedDate {
    pub const DEFAULT_PATTERN: &'static str = "EEEE, MMM d, yyyy";

    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let strftime = to_strftime(&pattern)?;
        Ok(FormattedDate { pattern, strftime })
    }

    /// `yyyy-MM-dd`.
    pub fn iso_8601() -> Self {
        FormattedDate {
            pattern: "yyyy-MM-dd".to_owned(),
            strftime: "%Y-%m-%d".to_owned(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.strftime).to_string()
    }
}

impl Default for FormattedDate {
    fn default() -> Self {
        FormattedDate {
            pattern: Self::DEFAULT_PATTERN.to_owned(),
            strftime: "%A, %b %-d, %Y".to_owned(),
        }
    }
}

impl TryFrom<String> for FormattedDate {
    type Error = WrapperError;

    fn try_from(pattern: String) -> Result<Self> {
        FormattedDate::new(pattern)
    }
}

impl From<FormattedDate> for String {
    fn from(date: FormattedDate) -> String {
        date.pattern
    }
}

impl Policy<NaiveDateTime> for FormattedDate {}
impl Policy<NaiveDate> for FormattedDate {}

impl Project<NaiveDateTime> for FormattedDate {
    type Output = String;

    fn project(&self, value: &NaiveDateTime) -> String {
        self.format(value)
    }
}

/// Time fields in the pattern read as midnight.
impl Project<NaiveDate> for FormattedDate {
    type Output = String;

    fn project(&self, value: &NaiveDate) -> String {
        self.format(&value.and_time(NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WrappedField;

    fn jan_5_2021() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 5).unwrap()
    }

    #[test]
    fn us_date_projects_month_day_year() {
        let birth_date = WrappedField::new(jan_5_2021(), UsDate);
        assert_eq!(birth_date.project(), "01-05-2021");
        assert_eq!(birth_date.get(), jan_5_2021());
    }

    #[test]
    fn us_date_ignores_the_time_of_day() {
        let moment = jan_5_2021().and_hms_opt(23, 59, 59).unwrap();
        let birth_date = WrappedField::new(moment, UsDate);
        assert_eq!(birth_date.project(), "01-05-2021");
    }

    #[test]
    fn us_date_uses_the_calendar_year_at_year_end() {
        // Dec 31 2018 falls in ISO week 1 of 2019.
        let new_years_eve = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        assert_eq!(UsDate.project(&new_years_eve), "12-31-2018");
    }

    #[test]
    fn formatted_date_defaults_to_long_form() {
        let birth_date = WrappedField::new(jan_5_2021(), FormattedDate::default());
        assert_eq!(birth_date.project(), "Tuesday, Jan 5, 2021");
    }

    #[test]
    fn default_matches_the_translated_default_pattern() {
        assert_eq!(
            FormattedDate::new(FormattedDate::DEFAULT_PATTERN).unwrap(),
            FormattedDate::default()
        );
    }

    #[test]
    fn iso_8601_matches_its_pattern() {
        assert_eq!(FormattedDate::new("yyyy-MM-dd").unwrap(), FormattedDate::iso_8601());
    }

    #[test]
    fn formatted_date_follows_the_configured_pattern() {
        let iso = FormattedDate::new("yyyy-MM-dd").unwrap();
        let mut birth_date = WrappedField::new(jan_5_2021(), iso);
        assert_eq!(birth_date.project(), "2021-01-05");

        birth_date.set(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(birth_date.project(), "1999-12-31");
    }

    #[test]
    fn formatted_date_renders_time_fields() {
        let format = FormattedDate::new("MMMM d, h:mm a").unwrap();
        let moment = jan_5_2021().and_hms_opt(14, 7, 0).unwrap();
        assert_eq!(format.project(&moment), "January 5, 2:07 PM");
    }

    #[test]
    fn formatted_date_round_trips_through_its_pattern() {
        let format: FormattedDate = serde_json::from_str(r#""dd/MM/yy""#).unwrap();
        assert_eq!(format.pattern(), "dd/MM/yy");
        assert_eq!(serde_json::to_string(&format).unwrap(), r#""dd/MM/yy""#);

        assert!(serde_json::from_str::<FormattedDate>(r#""yyyy QQ""#).is_err());
    }
}
