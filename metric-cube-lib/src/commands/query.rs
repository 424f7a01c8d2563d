use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::cube::{Cube, DimensionKey};
use crate::reports::{export_file_name, generate_console, generate_csv, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Dimensions to group by, in any order (e.g. `brand,month`)
    #[arg(long, short = 'd', value_name = "DIMENSIONS", value_delimiter = ',', required = true)]
    pub dims: Vec<String>,

    /// Save the table as CSV; a directory gets a `metrics_<dimensions>.csv` file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Save the table as JSON; a directory gets a `metrics_<dimensions>.json` file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Print the table to the terminal even when saving it to files
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn query_cube<H: Host>(host: &mut H, args: &QueryArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let cube = common.build_cube()?;
    report(&mut common, &cube, args)
}

fn report<H: Host>(common: &mut Common<'_, H>, cube: &Cube, args: &QueryArgs) -> Result<()> {
    let Some(table) = cube.lookup(&args.dims) else {
        let _ = writeln!(
            common.host().error(),
            "Granularity not supported: {}",
            args.dims.join(", ")
        );
        common.host().exit(1);
        return Ok(());
    };

    let key = table.key();
    if table.is_empty() {
        let _ = writeln!(common.host().output(), "No data for this combination: {key}");
        return Ok(());
    }

    let saving = args.csv.is_some() || args.json.is_some();
    if args.console || !saving {
        let mut console_output = String::new();
        generate_console(table, common.use_colors(), &mut console_output)?;
        let _ = writeln!(common.host().output(), "Showing summary for: {key}\n");
        let _ = write!(common.host().output(), "{console_output}");
    }

    if let Some(path) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(table, &mut csv_output)?;
        let target = output_path(path, key, "csv");
        fs::write(&target, csv_output).into_app_err_with(|| format!("writing CSV report to '{target}'"))?;
        let _ = writeln!(common.host().output(), "Saved CSV report: {target}");
    }

    if let Some(path) = &args.json {
        let mut json_output = String::new();
        generate_json(table, &mut json_output)?;
        let target = output_path(path, key, "json");
        fs::write(&target, json_output).into_app_err_with(|| format!("writing JSON report to '{target}'"))?;
        let _ = writeln!(common.host().output(), "Saved JSON report: {target}");
    }

    Ok(())
}

fn output_path(path: &Utf8Path, key: &DimensionKey, extension: &str) -> Utf8PathBuf {
    if path.is_dir() {
        path.join(export_file_name(key, extension))
    } else {
        path.to_path_buf()
    }
}
