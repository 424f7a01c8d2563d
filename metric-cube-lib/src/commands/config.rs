use crate::Result;
use crate::cube::CubeBuilder;
use crate::records::CsvColumns;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the working directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "cube.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dimensions whose combinations are materialized, in configuration order
    ///
    /// Tables are keyed and printed with their dimensions sorted by name, whatever this order is.
    #[serde(default = "default_dimensions")]
    pub dimensions: Vec<String>,

    /// Column holding each observation's metric category
    #[serde(default = "default_category_column")]
    pub category_column: String,

    /// Column holding each observation's subject identifier
    #[serde(default = "default_subject_column")]
    pub subject_column: String,

    /// Column holding each observation's numeric value
    #[serde(default = "default_value_column")]
    pub value_column: String,

    /// Whether dimension combinations are computed in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_dimensions() -> Vec<String> {
    ["brand", "indication", "vendor", "month", "vehicle"].map(String::from).to_vec()
}

fn default_category_column() -> String {
    "metric_category".to_string()
}

fn default_subject_column() -> String {
    "bp_id".to_string()
}

fn default_value_column() -> String {
    "value".to_string()
}

const fn default_parallel() -> bool {
    true
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading metric-cube configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading metric-cube configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate().into_app_err_with(|| format!("validating configuration file '{final_path}'"))?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// A cube builder for the configured dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension list is empty, repeats a name, or is too long
    pub fn builder(&self) -> Result<CubeBuilder> {
        Ok(CubeBuilder::new(&self.dimensions)?.parallel(self.parallel))
    }

    #[must_use]
    pub fn columns(&self) -> CsvColumns<'_> {
        CsvColumns {
            dimensions: &self.dimensions,
            category: &self.category_column,
            subject: &self.subject_column,
            value: &self.value_column,
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension list is unusable or a column name is blank
    fn validate(&self) -> Result<()> {
        let _ = self.builder()?;

        if let Some(blank) = self.dimensions.iter().find(|name| name.trim().is_empty()) {
            return Err(app_err!("dimension names must not be blank, got '{blank}'"));
        }

        for (field, column) in [
            ("category_column", &self.category_column),
            ("subject_column", &self.subject_column),
            ("value_column", &self.value_column),
        ] {
            if column.trim().is_empty() {
                return Err(app_err!("{field} must not be blank"));
            }

            if self.dimensions.contains(column) {
                return Err(app_err!("{field} '{column}' is also configured as a dimension"));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
