use chrono::NaiveDate;

use crate::errors::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest date the provider has fixtures for.
pub const EARLIEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2014, 1, 1) {
    Some(date) => date,
    None => panic!("2014-01-01 is a valid date"),
};

/// Parses a `YYYY-MM-DD` date no later than `today` and no earlier than
/// [`EARLIEST_DATE`].
pub fn validate_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidFormat)?;
    if date > today {
        return Err(ValidationError::FutureDate);
    }
    if date < EARLIEST_DATE {
        return Err(ValidationError::TooOld);
    }
    Ok(date)
}

pub fn validate_league_id(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let n = trimmed.parse::<i64>().map_err(|_| ValidationError::NotANumber)?;
    if n <= 0 {
        return Err(ValidationError::NonPositive);
    }
    u32::try_from(n).map_err(|_| ValidationError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn accepts_past_dates() {
        assert_eq!(
            validate_date("2023-06-15", today()),
            Ok(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())
        );
        assert_eq!(validate_date(" 2024-03-01\n", today()), Ok(today()));
        assert!(validate_date("2014-01-01", today()).is_ok());
    }

    #[test]
    fn rejects_future_dates() {
        assert_eq!(validate_date("2030-01-01", today()), Err(ValidationError::FutureDate));
        assert_eq!(validate_date("2024-03-02", today()), Err(ValidationError::FutureDate));
    }

    #[test]
    fn rejects_dates_before_floor() {
        assert_eq!(validate_date("2010-01-01", today()), Err(ValidationError::TooOld));
        assert_eq!(validate_date("2013-12-31", today()), Err(ValidationError::TooOld));
    }

    #[test]
    fn floor_is_first_of_january_2014() {
        assert_eq!(EARLIEST_DATE, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
        assert_eq!(
            validate_date("2014-01-01", today()),
            Ok(EARLIEST_DATE)
        );
        assert_eq!(validate_date("0001-01-01", today()), Err(ValidationError::TooOld));
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in ["", "15/06/2023", "2023-13-01", "2023-02-30", "yesterday"] {
            assert_eq!(validate_date(input, today()), Err(ValidationError::InvalidFormat), "{input}");
        }
    }

    #[test]
    fn league_ids() {
        assert_eq!(validate_league_id("39"), Ok(39));
        assert_eq!(validate_league_id(" 3 "), Ok(3));
        assert_eq!(validate_league_id("abc"), Err(ValidationError::NotANumber));
        assert_eq!(validate_league_id("3.5"), Err(ValidationError::NotANumber));
        assert_eq!(validate_league_id(""), Err(ValidationError::NotANumber));
        assert_eq!(validate_league_id("-3"), Err(ValidationError::NonPositive));
        assert_eq!(validate_league_id("0"), Err(ValidationError::NonPositive));
        assert_eq!(validate_league_id("99999999999"), Err(ValidationError::NotANumber));
    }
}
