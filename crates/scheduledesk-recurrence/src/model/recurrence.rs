use serde::{Deserialize, Serialize};

/// ## Summary
/// Recurrence rule of an availability template.
///
/// Parsing is lenient: names are matched case-insensitively and ignoring
/// separators (`EveryWeek`, `every_week` and `every-week` are the same rule).
/// Anything else is kept verbatim as [`Recurrence::Unrecognized`] rather than
/// rejected, so a bad row never hides the rest of a calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Recurrence {
    #[default]
    None,
    EveryWeek,
    EveryOtherWeek,
    EveryMonth,
    Unrecognized(String),
}

impl Recurrence {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "None",
            Self::EveryWeek => "EveryWeek",
            Self::EveryOtherWeek => "EveryOtherWeek",
            Self::EveryMonth => "EveryMonth",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// True for every rule except [`Recurrence::None`], unrecognized ones included.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<&str> for Recurrence {
    fn from(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "" | "none" => Self::None,
            "everyweek" | "weekly" => Self::EveryWeek,
            "everyotherweek" | "biweekly" => Self::EveryOtherWeek,
            "everymonth" | "monthly" => Self::EveryMonth,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Recurrence {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<String>> for Recurrence {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::None, Self::from)
    }
}

impl From<Recurrence> for String {
    fn from(value: Recurrence) -> Self {
        match value {
            Recurrence::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an `EveryMonth` template picks its day in the following months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MonthlyRecurrence {
    /// Same day of month as the template's start date.
    #[default]
    ExactDate,
    /// Same ordinal weekday as the start date, e.g. "2nd Tuesday".
    WeekAndDay,
    /// Unknown `type`; advanced like `ExactDate`.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_canonical_names() {
        assert_eq!(Recurrence::from("None"), Recurrence::None);
        assert_eq!(Recurrence::from("EveryWeek"), Recurrence::EveryWeek);
        assert_eq!(Recurrence::from("EveryOtherWeek"), Recurrence::EveryOtherWeek);
        assert_eq!(Recurrence::from("EveryMonth"), Recurrence::EveryMonth);
    }

    #[test]
    fn test_parses_loose_spellings() {
        assert_eq!(Recurrence::from("every_week"), Recurrence::EveryWeek);
        assert_eq!(Recurrence::from("every-other-week"), Recurrence::EveryOtherWeek);
        assert_eq!(Recurrence::from("EVERY MONTH"), Recurrence::EveryMonth);
        assert_eq!(Recurrence::from(""), Recurrence::None);
    }

    #[test]
    fn test_keeps_unrecognized_value() {
        let recurrence = Recurrence::from("BogusValue");
        assert_eq!(recurrence, Recurrence::Unrecognized("BogusValue".to_string()));
        assert!(recurrence.is_recurring());
        assert_eq!(recurrence.to_string(), "BogusValue");
    }

    #[test]
    fn test_json_null_and_string() {
        let none: Recurrence = serde_json::from_str("null").unwrap();
        assert_eq!(none, Recurrence::None);

        let weekly: Recurrence = serde_json::from_str("\"EveryWeek\"").unwrap();
        assert_eq!(weekly, Recurrence::EveryWeek);
        assert_eq!(serde_json::to_string(&weekly).unwrap(), "\"EveryWeek\"");
    }

    #[test]
    fn test_monthly_recurrence_json() {
        let exact: MonthlyRecurrence = serde_json::from_str(r#"{"type":"ExactDate"}"#).unwrap();
        assert_eq!(exact, MonthlyRecurrence::ExactDate);

        let week_and_day: MonthlyRecurrence =
            serde_json::from_str(r#"{"type":"WeekAndDay"}"#).unwrap();
        assert_eq!(week_and_day, MonthlyRecurrence::WeekAndDay);
        assert_eq!(
            serde_json::to_string(&week_and_day).unwrap(),
            r#"{"type":"WeekAndDay"}"#
        );

        let other: MonthlyRecurrence = serde_json::from_str(r#"{"type":"Lunar"}"#).unwrap();
        assert_eq!(other, MonthlyRecurrence::Other);
    }
}
