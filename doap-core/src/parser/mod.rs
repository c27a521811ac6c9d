use serde::de::DeserializeOwned;

use crate::error::{DoapError, ParseError};
use crate::model::{Project, Record, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub document: T,
    pub format: DocumentFormat,
}

pub fn parse_project_str(input: &str, format: DocumentFormat) -> Result<Parsed<Project>, ParseError> {
    parse_str(input, format)
}

pub fn parse_settings_str(input: &str, format: DocumentFormat) -> Result<Parsed<Settings>, ParseError> {
    parse_str(input, format)
}

/// Parse an arbitrary mapping document into a [`Record`].
pub fn parse_record_str(input: &str, format: DocumentFormat) -> Result<Parsed<Record>, DoapError> {
    let parsed = parse_str::<serde_json::Value>(input, format)?;
    Ok(Parsed {
        document: Record::from_json(&parsed.document)?,
        format: parsed.format,
    })
}

fn parse_str<T: DeserializeOwned>(input: &str, format: DocumentFormat) -> Result<Parsed<T>, ParseError> {
    match format {
        DocumentFormat::Json => Ok(Parsed {
            document: serde_json::from_str::<T>(input)?,
            format,
        }),
        DocumentFormat::Yaml => Ok(Parsed {
            document: serde_yaml::from_str::<T>(input)?,
            format,
        }),
        DocumentFormat::Auto => parse_auto(input),
    }
}

fn parse_auto<T: DeserializeOwned>(input: &str) -> Result<Parsed<T>, ParseError> {
    // JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(ParseError::UnknownFormat);
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<T>(input) {
            Ok(document) => Ok(Parsed {
                document,
                format: DocumentFormat::Json,
            }),
            // Flow-style YAML also starts with a brace.
            Err(e) => match serde_yaml::from_str::<T>(input) {
                Ok(document) => Ok(Parsed {
                    document,
                    format: DocumentFormat::Yaml,
                }),
                Err(_) => Err(ParseError::Json(e)),
            },
        };
    }

    match serde_yaml::from_str::<T>(input) {
        Ok(document) => Ok(Parsed {
            document,
            format: DocumentFormat::Yaml,
        }),
        Err(e) => {
            if let Ok(document) = serde_json::from_str::<T>(input) {
                return Ok(Parsed {
                    document,
                    format: DocumentFormat::Json,
                });
            }
            Err(ParseError::Yaml(e))
        }
    }
}
