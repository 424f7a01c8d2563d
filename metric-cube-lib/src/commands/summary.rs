use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::cube::Cube;
use clap::Parser;
use compact_str::CompactString;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// List every materialized dimension combination with its number of rows.
pub fn summarize_cube<H: Host>(host: &mut H, args: &SummaryArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let cube = common.build_cube()?;
    write_summary(common.host(), &cube);
    Ok(())
}

fn write_summary<H: Host>(host: &mut H, cube: &Cube) {
    let mut keys: Vec<_> = cube.keys().collect();
    keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.names().cmp(b.names())));

    let width = keys.iter().map(|key| key.to_string().len()).max().unwrap_or(0);

    let dimensions: Vec<&str> = cube.dimensions().iter().map(CompactString::as_str).collect();

    let mut output = host.output();
    let _ = writeln!(output, "{} dimension combinations over: {}", cube.len(), dimensions.join(", "));
    for key in keys {
        let rows = cube.get(key).map_or(0, |table| table.len());
        let _ = writeln!(output, "  {:<width$}  {rows} rows", key.to_string());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::cube::CubeBuilder;
    use crate::records::{MetricCategory, RecordStore};

    #[test]
    fn test_summary_lists_keys_smallest_first() {
        let mut store = RecordStore::new(["brand", "month"]).unwrap();
        store
            .push([("brand", Some("A")), ("month", Some("2024-01"))], MetricCategory::Reach, "1", 1.0)
            .unwrap();
        store
            .push([("brand", Some("B")), ("month", Some("2024-01"))], MetricCategory::Reach, "2", 1.0)
            .unwrap();
        let cube = CubeBuilder::new(["brand", "month"]).unwrap().build(&store).unwrap();

        let mut host = TestHost::new();
        write_summary(&mut host, &cube);

        insta::assert_snapshot!(host.output_str(), @r"
        3 dimension combinations over: brand, month
          brand         2 rows
          month         1 rows
          brand, month  2 rows
        ");
    }
}
