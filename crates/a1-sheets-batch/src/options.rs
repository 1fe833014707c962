//! Batch options

use std::fmt;
use std::str::FromStr;

use a1_sheets_core::CellRange;
use serde::{Deserialize, Serialize};

/// Options for building and sending a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Service name passed to the session provider (default: "sheets")
    pub service_name: String,
    /// Service version passed to the session provider (default: "v4")
    pub service_version: String,
    /// How written values are interpreted
    pub value_input_option: ValueInputOption,
    /// How read values are rendered
    pub value_render_option: ValueRenderOption,
    /// How dates and times are rendered when values are not formatted
    pub date_time_render_option: DateTimeRenderOption,
    /// Echo written values back in the reply to each write
    pub include_values_in_response: bool,
    /// Ask for the updated spreadsheet in the response
    pub include_spreadsheet_in_response: bool,
    /// Ranges to include when the spreadsheet is returned
    pub response_ranges: Vec<CellRange>,
    /// Include grid data when the spreadsheet is returned
    pub response_include_grid_data: bool,
    /// Reject reduce/reshape edits that would cut into a preserved tracked range
    pub enforce_preserved_extent: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            service_name: "sheets".to_string(),
            service_version: "v4".to_string(),
            value_input_option: ValueInputOption::UserEntered,
            value_render_option: ValueRenderOption::FormattedValue,
            date_time_render_option: DateTimeRenderOption::SerialNumber,
            include_values_in_response: false,
            include_spreadsheet_in_response: false,
            response_ranges: Vec::new(),
            response_include_grid_data: false,
            enforce_preserved_extent: false,
        }
    }
}

/// How the service interprets written values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Store values as-is
    Raw,
    /// Parse values as if typed into the UI (formulas, dates, numbers)
    #[default]
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

impl fmt::Display for ValueInputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueInputOption {
    type Err = a1_sheets_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "RAW" => Ok(ValueInputOption::Raw),
            "USER_ENTERED" => Ok(ValueInputOption::UserEntered),
            other => Err(a1_sheets_core::Error::InvalidLabel(format!(
                "value input option must be RAW or USER_ENTERED, not '{}'",
                other
            ))),
        }
    }
}

/// How the service renders values it returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueRenderOption {
    /// As displayed in the UI, with number formats applied
    #[default]
    FormattedValue,
    /// Calculated but unformatted
    UnformattedValue,
    /// Formulas rather than their results
    Formula,
}

impl ValueRenderOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueRenderOption::FormattedValue => "FORMATTED_VALUE",
            ValueRenderOption::UnformattedValue => "UNFORMATTED_VALUE",
            ValueRenderOption::Formula => "FORMULA",
        }
    }
}

impl fmt::Display for ValueRenderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueRenderOption {
    type Err = a1_sheets_core::Error;

    /// Accepts the wire names and the short forms `FORMATTED`/`UNFORMATTED`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "FORMATTED" | "FORMATTED_VALUE" => Ok(ValueRenderOption::FormattedValue),
            "UNFORMATTED" | "UNFORMATTED_VALUE" => Ok(ValueRenderOption::UnformattedValue),
            "FORMULA" => Ok(ValueRenderOption::Formula),
            other => Err(a1_sheets_core::Error::InvalidLabel(format!(
                "value render option must be FORMATTED_VALUE, UNFORMATTED_VALUE or FORMULA, not '{}'",
                other
            ))),
        }
    }
}

/// How the service renders dates and times it returns
///
/// Ignored by the service when values are rendered as `FORMATTED_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateTimeRenderOption {
    /// Days since 1899-12-30 as a number
    #[default]
    SerialNumber,
    /// Text in the cell's number format
    FormattedString,
}

impl DateTimeRenderOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateTimeRenderOption::SerialNumber => "SERIAL_NUMBER",
            DateTimeRenderOption::FormattedString => "FORMATTED_STRING",
        }
    }
}

impl fmt::Display for DateTimeRenderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateTimeRenderOption {
    type Err = a1_sheets_core::Error;

    /// Accepts the wire names and the short forms `SERIAL`/`FORMATTED`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SERIAL" | "SERIAL_NUMBER" => Ok(DateTimeRenderOption::SerialNumber),
            "FORMATTED" | "FORMATTED_STRING" => Ok(DateTimeRenderOption::FormattedString),
            other => Err(a1_sheets_core::Error::InvalidLabel(format!(
                "date/time render option must be SERIAL_NUMBER or FORMATTED_STRING, not '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BatchOptions::default();
        assert_eq!(options.service_name, "sheets");
        assert_eq!(options.service_version, "v4");
        assert_eq!(options.value_input_option, ValueInputOption::UserEntered);
        assert!(!options.include_spreadsheet_in_response);
        assert!(options.response_ranges.is_empty());
        assert!(!options.enforce_preserved_extent);
        assert_eq!(options.value_render_option, ValueRenderOption::FormattedValue);
        assert_eq!(options.date_time_render_option, DateTimeRenderOption::SerialNumber);
        assert!(!options.include_values_in_response);
    }

    #[test]
    fn test_render_option_parse() {
        assert_eq!(
            "formatted".parse::<ValueRenderOption>().unwrap(),
            ValueRenderOption::FormattedValue
        );
        assert_eq!(
            "unformatted-value".parse::<ValueRenderOption>().unwrap(),
            ValueRenderOption::UnformattedValue
        );
        assert_eq!("FORMULA".parse::<ValueRenderOption>().unwrap(), ValueRenderOption::Formula);
        assert!("raw".parse::<ValueRenderOption>().is_err());

        assert_eq!(
            "serial".parse::<DateTimeRenderOption>().unwrap(),
            DateTimeRenderOption::SerialNumber
        );
        assert_eq!(
            "formatted_string".parse::<DateTimeRenderOption>().unwrap(),
            DateTimeRenderOption::FormattedString
        );
        assert!("iso".parse::<DateTimeRenderOption>().is_err());

        assert_eq!(
            serde_json::to_string(&ValueRenderOption::UnformattedValue).unwrap(),
            "\"UNFORMATTED_VALUE\""
        );
        assert_eq!(
            serde_json::to_string(&DateTimeRenderOption::FormattedString).unwrap(),
            "\"FORMATTED_STRING\""
        );
    }

    #[test]
    fn test_value_input_option_parse() {
        assert_eq!("raw".parse::<ValueInputOption>().unwrap(), ValueInputOption::Raw);
        assert_eq!(
            "user-entered".parse::<ValueInputOption>().unwrap(),
            ValueInputOption::UserEntered
        );
        assert!("formatted".parse::<ValueInputOption>().is_err());
        assert_eq!(
            serde_json::to_string(&ValueInputOption::UserEntered).unwrap(),
            "\"USER_ENTERED\""
        );
    }
}
