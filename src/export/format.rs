use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Text];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Text => "Text",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Json => "Structured data format",
            ExportFormat::Csv => "Spreadsheet format",
            ExportFormat::Text => "Plain text format",
        }
    }

    /// Fixed download name.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "users.json",
            ExportFormat::Csv => "users.csv",
            ExportFormat::Text => "users.txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Text => "text/plain",
        }
    }

    /// Next format in dialog order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ExportFormat::Json => ExportFormat::Csv,
            ExportFormat::Csv => ExportFormat::Text,
            ExportFormat::Text => ExportFormat::Json,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            ExportFormat::Json => ExportFormat::Text,
            ExportFormat::Csv => ExportFormat::Json,
            ExportFormat::Text => ExportFormat::Csv,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ParseError::new("export format", s, "json, csv, text")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_and_mime_types() {
        let pairs: Vec<(&str, &str)> = ExportFormat::ALL
            .iter()
            .map(|f| (f.file_name(), f.mime_type()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("users.json", "application/json"),
                ("users.csv", "text/csv"),
                ("users.txt", "text/plain"),
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_cycle() {
        for format in ExportFormat::ALL {
            assert_eq!(format.next().previous(), format);
        }
        assert_eq!(ExportFormat::Text.next(), ExportFormat::Json);
    }
}
