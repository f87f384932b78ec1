// src/cli.rs
use std::path::{Path, PathBuf};

use crate::config::options::{AppOptions, ExportFormat, ExtractMode};
use crate::config::consts::REVIEW_HEADERS;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::sentiment::{self, Thresholds, VaderScorer};
use crate::session::SessionTable;
use crate::store::{self, Loaded};
use crate::{file, scrape, viz};

const DEFAULT_COLUMN: &str = REVIEW_HEADERS[4];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Extract { urls: Vec<String>, out: Option<PathBuf> },
    Analyze { source: String, column: Option<String>, out: Option<PathBuf> },
    Summary { path: PathBuf },
    Help,
}

/// Progress on stderr so stdout stays clean for `summary`.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, url: &str, rows: usize) {
        eprintln!("{url}: {rows} review(s)");
    }
    fn failed(&mut self, what: &str, err: &str) {
        eprintln!("failed: {what}: {err}");
    }
}

fn usage<T: Into<String>>(msg: T) -> Error {
    Error::Usage(msg.into())
}

/// Parse arguments (program name already skipped). Extract/format flags are
/// written straight into `opts`.
pub fn parse<I: IntoIterator<Item = String>>(args: I, opts: &mut AppOptions) -> Result<Command> {
    let mut args = args.into_iter();
    let Some(cmd) = args.next() else { return Ok(Command::Help) };

    let mut positional = Vec::new();
    let mut out = None;
    let mut column = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing output path"))?)),
            "--column" => column = Some(args.next().ok_or_else(|| usage("Missing value for --column"))?),
            "--grouped" => opts.extract.mode = ExtractMode::Grouped,
            "--format" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --format"))?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {other}"))),
                };
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => return Err(usage(format!("Unknown arg: {flag}"))),
            _ => positional.push(a),
        }
    }

    match cmd.as_str() {
        "extract" => {
            if positional.is_empty() {
                return Err(usage("extract needs at least one link"));
            }
            Ok(Command::Extract { urls: positional, out })
        }
        "analyze" => {
            let mut it = positional.into_iter();
            let source = it.next().ok_or_else(|| usage("analyze needs a CSV path or sheet link"))?;
            if let Some(extra) = it.next() {
                return Err(usage(format!("Unexpected argument: {extra}")));
            }
            Ok(Command::Analyze { source, column, out })
        }
        "summary" => {
            let path = positional.into_iter().next().ok_or_else(|| usage("summary needs a results file"))?;
            Ok(Command::Summary { path: PathBuf::from(path) })
        }
        "-h" | "--help" | "help" => Ok(Command::Help),
        other => Err(usage(format!("Unknown command: {other}"))),
    }
}

pub fn run() -> Result<()> {
    let mut opts = AppOptions::default();
    let cmd = parse(std::env::args().skip(1), &mut opts)?;
    logf!("CLI: {:?}", cmd);
    execute(cmd, &opts)
}

pub fn execute(cmd: Command, opts: &AppOptions) -> Result<()> {
    match cmd {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Extract { urls, out } => extract(&urls, out, opts),
        Command::Analyze { source, column, out } => analyze(&source, column, out, opts),
        Command::Summary { path } => summary(&path),
    }
}

fn extract(urls: &[String], out: Option<PathBuf>, opts: &AppOptions) -> Result<()> {
    let mut session = SessionTable::new();
    let mut prog = ConsoleProgress;

    for url in urls {
        // one bad page should not lose the others
        match scrape::collect_reviews(url, &opts.extract, Some(&mut prog)) {
            Ok(x) if x.records.is_empty() => eprintln!("{url}: no reviews found, skipped"),
            Ok(x) => { session.append(x.records); }
            Err(_) => continue,
        }
    }

    if session.is_empty() {
        return Err(Error::MissingPrerequisite("no reviews extracted"));
    }

    let ds = session.snapshot();
    let path = match out {
        Some(p) => {
            store::save_delimited(&ds, &p, opts.export.format.delim(), opts.export.include_headers)?;
            p
        }
        None => file::export_extracted(&opts.export, &ds)?,
    };
    println!("Wrote {} row(s) to {}", ds.row_count(), path.display());
    Ok(())
}

fn load_source(source: &str, timeout_secs: u64) -> Result<Loaded> {
    if source.starts_with("http://") || source.starts_with("https://") {
        store::load_sheet(source, timeout_secs)
    } else {
        store::load_path(&PathBuf::from(file::normalize_separators(source)))
    }
}

fn analyze(source: &str, column: Option<String>, out: Option<PathBuf>, opts: &AppOptions) -> Result<()> {
    let loaded = load_source(source, opts.extract.timeout_secs)?;
    eprintln!(
        "Read {} row(s) using {} encoding ({} malformed line(s) skipped)",
        loaded.dataset.row_count(), loaded.encoding, loaded.skipped
    );

    let column = column
        .or_else(|| opts.analysis.column.clone())
        .unwrap_or_else(|| s!(DEFAULT_COLUMN));
    let thresholds = Thresholds::from_options(&opts.analysis);
    let mut prog = ConsoleProgress;
    let labeled = sentiment::analyze(&loaded.dataset, &column, &VaderScorer, &thresholds, Some(&mut prog))?;

    let path = match out {
        Some(p) => file::export_to(&p, &labeled)?,
        None => file::export_results(&opts.export, &labeled)?,
    };
    println!("Wrote {} labeled row(s) to {}", labeled.row_count(), path.display());
    Ok(())
}

fn summary(path: &Path) -> Result<()> {
    let loaded = store::load_path(path)?;
    let b = viz::pie_breakdown(&loaded.dataset)?;
    println!("{} row(s)", b.total);
    for slice in &b.slices {
        println!("{:<9} {:>6} {:>6.1}%", slice.label, slice.count, slice.percent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extract_takes_several_links_and_flags() {
        let mut o = AppOptions::default();
        let cmd = parse(args(&["extract", "http://a", "http://b", "--grouped", "--format", "tsv", "-o", "x.tsv"]), &mut o).unwrap();
        assert_eq!(cmd, Command::Extract {
            urls: args(&["http://a", "http://b"]),
            out: Some(PathBuf::from("x.tsv")),
        });
        assert_eq!(o.extract.mode, ExtractMode::Grouped);
        assert_eq!(o.export.format, ExportFormat::Tsv);
    }

    #[test]
    fn analyze_reads_column() {
        let mut o = AppOptions::default();
        let cmd = parse(args(&["analyze", "data.csv", "--column", "Short_Review"]), &mut o).unwrap();
        assert_eq!(cmd, Command::Analyze { source: s!("data.csv"), column: Some(s!("Short_Review")), out: None });
    }

    #[test]
    fn bad_input_is_a_usage_error() {
        let mut o = AppOptions::default();
        assert!(matches!(parse(args(&["extract"]), &mut o), Err(Error::Usage(_))));
        assert!(matches!(parse(args(&["frobnicate"]), &mut o), Err(Error::Usage(_))));
        assert!(matches!(parse(args(&["extract", "u", "--format", "xls"]), &mut o), Err(Error::Usage(_))));
        assert_eq!(parse(Vec::<String>::new(), &mut o).unwrap(), Command::Help);
    }
}
