//! url-breadcrumbs CLI
//!
//! Resolves request URLs into breadcrumb trails against a term catalog and
//! renders them as JSON-LD and visible HTML trails.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;
use url_breadcrumbs_core::{
    format_output, format_output_batch, Breadcrumbs, OutputFormat, PageKind, ResolverConfig,
    StaticPage, TermCatalog, TrailReport,
};

/// URL-structure breadcrumbs
#[derive(Parser)]
#[command(name = "url-breadcrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive breadcrumb trails from request URLs and render them")]
#[command(long_about = r#"
url-breadcrumbs: breadcrumbs from URL structure

Builds a breadcrumb trail from the path of a request URL, independent of any
permalink structure. Path segments that match a category or tag in the term
catalog become trail entries; everything else is skipped.

Output formats:
  - JSON (default) - Full report for programmatic use
  - YAML - Human-readable report
  - ANSI - Colorful terminal output
  - HTML - The JSON-LD head block followed by the visible trail
  - Summary - Plain text listing

Examples:
  url-breadcrumbs resolve https://site.test/electronics/phones \
      --base https://site.test --terms terms.yaml --active-term 9
  url-breadcrumbs resolve https://site.test/electronics/my-article \
      --base https://site.test --terms terms.yaml --page single --title "My Article" -f html
  url-breadcrumbs batch requests.yaml --base https://site.test --terms terms.yaml -f summary
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Resolver configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single request URL
    Resolve {
        /// Absolute request URL
        #[arg(value_parser = parse_absolute_url)]
        url: String,

        /// Site base URL
        #[arg(short, long, value_parser = parse_absolute_url)]
        base: String,

        /// Term catalog file (.yaml, .yml or .json)
        #[arg(short, long)]
        terms: PathBuf,

        /// Kind of page being served
        #[arg(short, long, value_enum, default_value_t = PageKindArg::Category)]
        page: PageKindArg,

        /// Item title (single-item pages)
        #[arg(long)]
        title: Option<String>,

        /// Id of the term the page is about
        #[arg(short, long)]
        active_term: Option<i64>,

        /// Override whether the page takes breadcrumbs (default: by page kind)
        #[arg(long, value_name = "BOOL")]
        eligible: Option<bool>,
    },

    /// Resolve every request listed in a YAML or JSON file
    Batch {
        /// Requests file
        requests: PathBuf,

        /// Site base URL for requests that do not name one
        #[arg(short, long, value_parser = parse_absolute_url)]
        base: Option<String>,

        /// Term catalog file (.yaml, .yml or .json)
        #[arg(short, long)]
        terms: PathBuf,

        /// Number of threads for parallel processing (default: auto)
        #[arg(long)]
        threads: Option<usize>,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Html,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

/// Page kind argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PageKindArg {
    /// Category listing
    Category,
    /// Tag listing
    Tag,
    /// Single item such as an article
    Single,
    /// Standalone page opted into breadcrumbs
    Page,
    /// Any other page (no breadcrumbs)
    Other,
}

impl From<PageKindArg> for PageKind {
    fn from(arg: PageKindArg) -> Self {
        match arg {
            PageKindArg::Category => PageKind::CategoryListing,
            PageKindArg::Tag => PageKind::TagListing,
            PageKindArg::Single => PageKind::SingleItem,
            PageKindArg::Page => PageKind::Page,
            PageKindArg::Other => PageKind::Other,
        }
    }
}

/// One request in a batch file
#[derive(Debug, Deserialize)]
struct RequestSpec {
    url: String,
    #[serde(default)]
    base: Option<String>,
    #[serde(default = "default_page_kind")]
    page: PageKind,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    active_term: Option<i64>,
    #[serde(default)]
    eligible: Option<bool>,
}

fn default_page_kind() -> PageKind {
    PageKind::CategoryListing
}

impl RequestSpec {
    fn page_context(&self) -> StaticPage {
        StaticPage {
            kind: self.page,
            title: self.title.clone(),
            active_term_id: self.active_term,
            eligible: self.eligible,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => ResolverConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let breadcrumbs = Breadcrumbs::new(config).context("Invalid resolver configuration")?;

    match &args.command {
        Commands::Resolve {
            url,
            base,
            terms,
            page,
            title,
            active_term,
            eligible,
        } => {
            let mut context = StaticPage::new((*page).into());
            context.title = title.clone();
            context.active_term_id = *active_term;
            context.eligible = *eligible;
            run_resolve(&breadcrumbs, url, base, terms, &context, &args)
        }
        Commands::Batch {
            requests,
            base,
            terms,
            threads,
        } => run_batch(&breadcrumbs, requests, base.as_deref(), terms, *threads, &args),
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Accept only absolute http(s) URLs
fn parse_absolute_url(raw: &str) -> Result<String, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("unsupported URL scheme '{}'", other)),
    }
}

fn load_catalog(path: &Path) -> Result<TermCatalog> {
    TermCatalog::from_path(path)
        .with_context(|| format!("Failed to load term catalog {}", path.display()))
}

fn run_resolve(
    breadcrumbs: &Breadcrumbs,
    url: &str,
    base: &str,
    terms: &Path,
    page: &StaticPage,
    args: &Args,
) -> Result<()> {
    let catalog = load_catalog(terms)?;
    let report = breadcrumbs.report(url, base, page, &catalog);

    if let Some(reason) = &report.reason {
        tracing::info!(url, reason = reason.as_str(), "no breadcrumbs");
    }

    let output = format_output(&report, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())
}

fn run_batch(
    breadcrumbs: &Breadcrumbs,
    requests_path: &Path,
    default_base: Option<&str>,
    terms: &Path,
    threads: Option<usize>,
    args: &Args,
) -> Result<()> {
    let catalog = load_catalog(terms)?;
    let requests = load_requests(requests_path)?;

    // Every request needs a base, either its own or the default
    let mut jobs = Vec::with_capacity(requests.len());
    for request in requests {
        let base = match request.base.clone().or_else(|| default_base.map(str::to_string)) {
            Some(base) => base,
            None => anyhow::bail!(
                "Request {} has no base URL and no --base was given",
                request.url
            ),
        };
        jobs.push((request, base));
    }

    // Show progress spinner
    let spinner = if args.verbose && atty::is(atty::Stream::Stderr) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Resolving {} requests...", jobs.len()));
        Some(pb)
    } else {
        None
    };

    let resolve_all = || -> Vec<TrailReport> {
        jobs.par_iter()
            .map(|(request, base)| {
                breadcrumbs.report(&request.url, base, &request.page_context(), &catalog)
            })
            .collect()
    };

    let reports = match threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("Failed to build thread pool")?
            .install(resolve_all),
        None => resolve_all(),
    };

    if let Some(ref pb) = spinner {
        let with_trail = reports.iter().filter(|r| r.has_trail()).count();
        pb.finish_with_message(format!(
            "Resolved {} requests, {} with a trail",
            reports.len(),
            with_trail
        ));
    }

    let output = format_output_batch(&reports, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())
}

fn load_requests(path: &Path) -> Result<Vec<RequestSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read requests file {}", path.display()))?;

    let requests = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&raw).context("Failed to parse requests JSON")?,
        _ => serde_yaml::from_str(&raw).context("Failed to parse requests YAML")?,
    };
    Ok(requests)
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_url() {
        assert!(parse_absolute_url("https://site.test/a").is_ok());
        assert!(parse_absolute_url("ftp://site.test/a").is_err());
        assert!(parse_absolute_url("/relative/path").is_err());
    }

    #[test]
    fn test_request_spec_defaults() {
        let spec: RequestSpec = serde_yaml::from_str("url: https://site.test/a").unwrap();
        let page = spec.page_context();

        assert_eq!(page.kind, PageKind::CategoryListing);
        assert!(spec.base.is_none());
        assert!(page.eligible.is_none());
    }
}
