use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::result;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::form::{FormFields, Format};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not determine config dir")]
    NoConfigDir,
    #[error("could not read {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config file {}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("field name for {0} must not be empty")]
    EmptyFieldName(&'static str),
    #[error("month and year field are both called {0:?}")]
    DuplicateFieldName(String),
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub month_field: String,
    pub year_field: String,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        let fields = FormFields::default();
        Self {
            month_field: fields.month,
            year_field: fields.year,
            format: Format::default(),
        }
    }
}

pub fn default_path() -> Result<PathBuf> {
    Ok(ProjectDirs::from("", "", "lastmonth")
        .ok_or(Error::NoConfigDir)?
        .config_dir()
        .join("config.json"))
}

impl Config {
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config from `path`, or from the default location if no path
    /// is given. A missing default file yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path, true),
            None => match default_path() {
                Ok(path) => Self::load_from(&path, false),
                Err(e) => {
                    debug!("{e}, using default config");
                    Ok(Self::default())
                }
            },
        }
    }

    /// A missing file is an error only if it is `required`.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::parse(path, &text)?;
                info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.month_field.trim().is_empty() {
            return Err(Error::EmptyFieldName("month"));
        }
        if self.year_field.trim().is_empty() {
            return Err(Error::EmptyFieldName("year"));
        }
        if self.month_field == self.year_field {
            return Err(Error::DuplicateFieldName(self.month_field.clone()));
        }
        Ok(())
    }

    pub fn fields(&self) -> FormFields {
        FormFields {
            month: self.month_field.clone(),
            year: self.year_field.clone(),
        }
    }
}
