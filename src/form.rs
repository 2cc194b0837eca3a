use std::result;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::period::YearMonth;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not serialize form values")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One `name=value` pair per line
    #[default]
    Plain,
    /// A form-urlencoded query string
    Query,
    /// A JSON object
    Json,
    /// Shell variable assignments
    Env,
}

/// Names of the month selector and year input to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub month: String,
    pub year: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            month: "month".to_string(),
            year: "year".to_string(),
        }
    }
}

impl FormFields {
    pub fn fill(&self, ym: YearMonth) -> FormValues {
        FormValues {
            month: (self.month.clone(), ym.month()),
            year: (self.year.clone(), ym.year()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub month: (String, u32),
    pub year: (String, i32),
}

impl FormValues {
    fn pairs(&self) -> [(&str, String); 2] {
        [
            (self.month.0.as_str(), self.month.1.to_string()),
            (self.year.0.as_str(), self.year.1.to_string()),
        ]
    }

    pub fn render(&self, format: Format) -> Result<String> {
        Ok(match format {
            Format::Plain => self
                .pairs()
                .iter()
                .map(|(name, value)| format!("{name}={value}\n"))
                .collect(),
            Format::Query => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(self.pairs())
                    .finish();
                format!("{query}\n")
            }
            Format::Json => {
                let mut map = Map::new();
                map.insert(self.month.0.clone(), Value::from(self.month.1));
                map.insert(self.year.0.clone(), Value::from(self.year.1));
                format!("{}\n", serde_json::to_string(&map)?)
            }
            Format::Env => self
                .pairs()
                .iter()
                .map(|(name, value)| format!("{}={value}\n", env_name(name)))
                .collect(),
        })
    }
}

fn env_name(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::period::YearMonth;

    use super::{Format, FormFields};

    fn values() -> super::FormValues {
        FormFields::default().fill(YearMonth::new(2026, 9).unwrap())
    }

    #[test]
    fn fill_uses_field_names() {
        let fields = FormFields {
            month: "report_month".to_string(),
            year: "report_year".to_string(),
        };
        let values = fields.fill(YearMonth::new(2023, 12).unwrap());
        assert_eq!(values.month, ("report_month".to_string(), 12));
        assert_eq!(values.year, ("report_year".to_string(), 2023));
    }

    #[test]
    fn plain() {
        assert_eq!(values().render(Format::Plain).unwrap(), "month=9\nyear=2026\n");
    }

    #[test]
    fn query() {
        assert_eq!(values().render(Format::Query).unwrap(), "month=9&year=2026\n");

        let fields = FormFields {
            month: "the month".to_string(),
            year: "y&r".to_string(),
        };
        let values = fields.fill(YearMonth::new(2026, 9).unwrap());
        assert_eq!(
            values.render(Format::Query).unwrap(),
            "the+month=9&y%26r=2026\n"
        );
    }

    #[test]
    fn json() {
        assert_eq!(
            values().render(Format::Json).unwrap(),
            "{\"month\":9,\"year\":2026}\n"
        );
    }

    #[test]
    fn env() {
        let fields = FormFields {
            month: "report-month".to_string(),
            year: "year".to_string(),
        };
        let values = fields.fill(YearMonth::new(-3, 1).unwrap());
        assert_eq!(
            values.render(Format::Env).unwrap(),
            "REPORT_MONTH=1\nYEAR=-3\n"
        );
    }
}
