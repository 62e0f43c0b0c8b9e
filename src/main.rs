use clap::Parser;
use rayon::prelude::*;

use loc_report::cli::{Cli, HELP_TEXT};
use loc_report::counter::{FileMetrics, scan_file};
use loc_report::output::{TableFormatter, sort_metrics};
use loc_report::{EXIT_ERROR, EXIT_SUCCESS, LocReportError, scanner};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return EXIT_ERROR;
        }
    };

    if cli.help || cli.is_bare() {
        print!("{HELP_TEXT}");
        return EXIT_SUCCESS;
    }

    match run_impl(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> loc_report::Result<i32> {
    // 1. Resolve CLI arguments into candidate files.
    let collected = scanner::collect_files(&cli.paths, cli.recursive);
    for err in &collected.errors {
        eprintln!("Error: {err}");
    }
    if collected.files.is_empty() {
        return Err(LocReportError::NoValidFiles);
    }

    // 2. Scan files in parallel; unreadable files are reported and skipped.
    let mut metrics: Vec<FileMetrics> = collected
        .files
        .par_iter()
        .filter_map(|path| match scan_file(path) {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                eprintln!("Error: {e}");
                None
            }
        })
        .collect();

    // 3. Order the rows: selected sort, or collection order.
    if let Some(spec) = cli.sort_spec() {
        sort_metrics(&mut metrics, spec);
    }

    // 4. Render the table.
    print!("{}", TableFormatter.format(&metrics));

    Ok(EXIT_SUCCESS)
}
