//! Indonesian date helpers for records that store raw attribute values by name.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::{FormatOptions, IndonesianDate, ParseError, format_date};

/// Error type for attribute-backed date operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The attribute is absent or blank.
    #[error("Attribute '{0}' has no date value")]
    Missing(String),

    /// The attribute value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Date derivations over a record's raw attribute values.
///
/// Implementors only provide [`DateAttributes::attribute`]. Formatting and name
/// lookups fail on an absent value; `zodiac` and `age` pass it through as `None`.
pub trait DateAttributes {
    /// Returns the raw value stored under `name`, if any.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Formats the attribute in Indonesian long form.
    ///
    /// # Errors
    /// Returns `AttributeError::Missing` for an absent value, `AttributeError::Parse` for an unparseable one.
    fn indonesian_date(&self, name: &str, options: FormatOptions) -> Result<String, AttributeError> {
        let date = required(self, name)?;
        Ok(format_date(&date, options))
    }

    /// Indonesian name of the attribute's day of week.
    ///
    /// # Errors
    /// Returns `AttributeError::Missing` for an absent value, `AttributeError::Parse` for an unparseable one.
    fn day_string(&self, name: &str) -> Result<&'static str, AttributeError> {
        Ok(required(self, name)?.day_of_week().name())
    }

    /// Indonesian name of the attribute's month.
    ///
    /// # Errors
    /// Returns `AttributeError::Missing` for an absent value, `AttributeError::Parse` for an unparseable one.
    fn month_string(&self, name: &str) -> Result<&'static str, AttributeError> {
        Ok(required(self, name)?.month().name())
    }

    /// Zodiac sign of the attribute, `None` when the attribute is absent or blank.
    ///
    /// # Errors
    /// Returns `AttributeError::Parse` for an unparseable value.
    fn zodiac(&self, name: &str) -> Result<Option<&'static str>, AttributeError> {
        Ok(crate::zodiac(self.attribute(name))?)
    }

    /// Age in whole years of the attribute, `None` when the attribute is absent or blank.
    ///
    /// # Errors
    /// Returns `AttributeError::Parse` for an unparseable value.
    fn age(&self, name: &str) -> Result<Option<u32>, AttributeError> {
        Ok(crate::age(self.attribute(name))?)
    }
}

fn required<A: DateAttributes + ?Sized>(attributes: &A, name: &str) -> Result<IndonesianDate, AttributeError> {
    match attributes.attribute(name).map(str::trim) {
        None | Some("") => Err(AttributeError::Missing(name.to_owned())),
        Some(value) => Ok(value.parse()?),
    }
}

impl<S: BuildHasher> DateAttributes for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl DateAttributes for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Member {
        name:       String,
        birth_date: Option<String>,
        joined_at:  String,
    }

    impl DateAttributes for Member {
        fn attribute(&self, name: &str) -> Option<&str> {
            match name {
                "name" => Some(self.name.as_str()),
                "birth_date" => self.birth_date.as_deref(),
                "joined_at" => Some(self.joined_at.as_str()),
                _ => None,
            }
        }
    }

    fn member(birth_date: Option<&str>) -> Member {
        Member {
            name:       "Sari".to_owned(),
            birth_date: birth_date.map(str::to_owned),
            joined_at:  "2024-09-23 18:00:00".to_owned(),
        }
    }

    #[test]
    fn test_indonesian_date() {
        let record = member(None);
        assert_eq!(
            record.indonesian_date("joined_at", FormatOptions::default()),
            Ok("Senin, 23 September 2024".to_owned())
        );
        assert_eq!(
            record.indonesian_date("joined_at", FormatOptions::full()),
            Ok("Senin, 23 September 2024 18.00".to_owned())
        );
    }

    #[test]
    fn test_day_and_month_strings() {
        let record = member(Some("1995-08-17"));
        assert_eq!(record.day_string("birth_date"), Ok("Kamis"));
        assert_eq!(record.month_string("birth_date"), Ok("Agustus"));
    }

    #[test]
    fn test_fail_fast_on_missing_attribute() {
        let record = member(None);
        assert_eq!(
            record.indonesian_date("birth_date", FormatOptions::default()),
            Err(AttributeError::Missing("birth_date".to_owned()))
        );
        assert_eq!(
            record.day_string("deleted_at"),
            Err(AttributeError::Missing("deleted_at".to_owned()))
        );
    }

    #[test]
    fn test_fail_fast_on_unparseable_attribute() {
        let record = member(None);
        let result = record.month_string("name");
        assert!(matches!(result, Err(AttributeError::Parse(ParseError::InvalidFormat(_)))));
    }

    #[test]
    fn test_pass_through_on_absent_birth_date() {
        let record = member(None);
        assert_eq!(record.zodiac("birth_date"), Ok(None));
        assert_eq!(record.age("birth_date"), Ok(None));

        let blank = member(Some(""));
        assert_eq!(blank.zodiac("birth_date"), Ok(None));
        assert_eq!(blank.age("birth_date"), Ok(None));
    }

    #[test]
    fn test_zodiac_and_age_of_present_birth_date() {
        let record = member(Some("1990-01-20"));
        assert_eq!(record.zodiac("birth_date"), Ok(Some("Aquarius")));

        let age = record.age("birth_date").expect("failed to compute age");
        assert!(age.is_some_and(|years| years >= 30));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let record = member(Some("yesterday"));
        let err = record.zodiac("birth_date").expect_err("expected parse error");
        assert_eq!(err.to_string(), "Invalid date format: yesterday");
    }

    #[test]
    fn test_map_backed_records() {
        let mut map = HashMap::new();
        map.insert("created_at".to_owned(), "2024-01-05 09:07".to_owned());
        assert_eq!(
            map.indonesian_date("created_at", FormatOptions::full()),
            Ok("Jum'at, 5 Januari 2024 9.07".to_owned())
        );

        let mut tree = BTreeMap::new();
        tree.insert("created_at".to_owned(), "2024-01-05".to_owned());
        assert_eq!(tree.month_string("created_at"), Ok("Januari"));
        assert_eq!(tree.age("missing"), Ok(None));
    }
}
