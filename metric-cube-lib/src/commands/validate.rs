use super::Host;
use super::config::Config;
use crate::Result;
use crate::records::check_header;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `cube.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Also check that this CSV file carries every configured column
    #[arg(value_name = "DATA")]
    pub data: Option<Utf8PathBuf>,
}

/// Validates a configuration file and, optionally, a data file's header against it
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or parsed, or the data header lacks a configured column
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>, data: Option<&Utf8PathBuf>) -> Result<()> {
    let config = Config::load(base_dir, config_path)?;

    if let Some(data) = data {
        check_header(data, &config.columns())?;
    }

    Ok(())
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match validate_config_inner(&base_dir, config_path, args.data.as_ref()) {
        Ok(()) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file given)");
            }
            if let Some(data) = &args.data {
                let _ = writeln!(host.output(), "Data file header matches: {data}");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};
    use std::fs;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir should be UTF-8");
        (dir, root)
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_default_config_is_valid() {
        let (_dir, root) = temp_root();
        let config_path = root.join("cube.toml");

        let mut init_host = TestHost::new();
        init_config(&mut init_host, &InitArgs { output: Some(config_path.clone()) }).expect("init_config should succeed");
        assert!(init_host.output_str().contains("Generated default configuration file"));

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: None,
        };
        let result = validate_config(&mut host, &args);

        assert!(result.is_ok(), "Default configuration should validate successfully: {result:?}");
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_toml_syntax() {
        let (_dir, root) = temp_root();
        let config_path = root.join("invalid_syntax.toml");
        fs::write(&config_path, "dimensions = [\"brand\"\n").expect("Failed to write test config");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: None,
        };
        let result = validate_config(&mut host, &args);

        assert!(result.is_err(), "Invalid TOML syntax should fail validation");
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().starts_with("❌ Configuration validation failed"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_duplicate_dimension() {
        let (_dir, root) = temp_root();
        let config_path = root.join("duplicate.toml");
        fs::write(&config_path, "dimensions = [\"brand\", \"month\", \"brand\"]\n").expect("Failed to write test config");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: None,
        };
        let error_msg = validate_config(&mut host, &args).unwrap_err().to_string();

        assert!(error_msg.contains("dimension 'brand' is configured more than once"), "{error_msg}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_data_header_missing_dimension() {
        let (_dir, root) = temp_root();
        let config_path = root.join("cube.toml");
        fs::write(&config_path, "dimensions = [\"brand\", \"vendor\"]\n").expect("Failed to write test config");
        let data_path = root.join("data.csv");
        fs::write(&data_path, "brand,metric_category,bp_id,value\nA,REACH,1,1\n").expect("Failed to write test data");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: Some(data_path),
        };
        let error_msg = validate_config(&mut host, &args).unwrap_err().to_string();

        assert!(error_msg.contains("'vendor'"), "{error_msg}");
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_data_header_matches() {
        let (_dir, root) = temp_root();
        let config_path = root.join("cube.toml");
        fs::write(&config_path, "dimensions = [\"brand\"]\n").expect("Failed to write test config");
        let data_path = root.join("data.csv");
        fs::write(&data_path, "brand,metric_category,bp_id,value\n").expect("Failed to write test data");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: Some(data_path),
        };
        validate_config(&mut host, &args).unwrap();

        assert!(host.output_str().contains("Data file header matches"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_empty_config_is_valid() {
        let (_dir, root) = temp_root();
        let config_path = root.join("empty.toml");
        fs::write(&config_path, "# Empty config file\n").expect("Failed to write test config");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path),
            data: None,
        };
        let result = validate_config(&mut host, &args);

        assert!(result.is_ok(), "Empty config should be valid (uses defaults)");
    }
}
