use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pageform::{
    app::{MenuItem, PageFormUI, UiOptions},
    domain::page_config_schema,
    io::{
        DocumentFormat,
        input::load_document,
        output::{OutputDestination, OutputOptions, emit_entity},
    },
    source::{DEFAULT_BASE_URL, HttpPageSource, PageSource, StaticPageSource},
};

#[derive(Debug, Parser)]
#[command(
    name = "pageform",
    version,
    about = "Render remotely configured data-entry pages as terminal forms"
)]
struct Cli {
    /// REST backend serving `pages/{id}` and `data/{id}`
    #[arg(long = "base-url", value_name = "URL", conflicts_with = "fixture")]
    base_url: Option<String>,

    /// Serve pages and entities from a local JSON/YAML/TOML document instead
    #[arg(long = "fixture", value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Page opened on start (defaults to the first menu entry)
    #[arg(short = 'p', long = "page", value_name = "ID")]
    page: Option<String>,

    /// Entity loaded into and saved from every page
    #[arg(short = 'e', long = "entity", value_name = "ID", default_value = "1")]
    entity: String,

    /// Title shown above the page menu
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Write tracing output to this file (filtered by RUST_LOG, default info)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the JSON Schema of the page configuration document and exit
    #[arg(long = "print-schema")]
    print_schema: bool,

    /// Where the last saved entity is written on exit ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from output file extensions when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force")]
    force: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&page_config_schema())
            .wrap_err("failed to render page schema")?;
        println!("{schema}");
        return Ok(());
    }

    let mut diagnostics = DiagnosticCollector::default();
    let fixture = load_fixture(cli.fixture.as_deref(), &mut diagnostics);
    let output = build_output_options(&cli, &mut diagnostics);
    diagnostics.into_result()?;

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut options = UiOptions::default().with_help(!cli.no_help);
    let source: Arc<dyn PageSource> = match fixture {
        Some(fixture) => {
            let menu = fixture
                .page_ids()
                .map(|id| MenuItem::new(id, menu_label(id)))
                .collect::<Vec<_>>();
            if !menu.is_empty() {
                options = options.with_menu(menu);
            }
            Arc::new(fixture)
        }
        None => {
            let base_url = cli.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
            Arc::new(HttpPageSource::new(base_url).wrap_err("failed to build HTTP client")?)
        }
    };
    info!(entity = %cli.entity, "starting form UI");

    let mut ui = PageFormUI::new(source)
        .with_entity(cli.entity.clone())
        .with_options(options);
    if let Some(page) = cli.page.as_ref() {
        ui = ui.with_page(page.clone());
    }
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    let saved = ui.run().map_err(Report::msg)?;
    match (saved, output) {
        (Some(entity), Some(output)) => emit_entity(&entity, &output).map_err(Report::msg)?,
        (None, Some(_)) => eprintln!("nothing was saved; no output written"),
        _ => {}
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

fn load_fixture(
    path: Option<&Path>,
    diagnostics: &mut DiagnosticCollector,
) -> Option<StaticPageSource> {
    let path = path?;
    let document = match load_document(path, None) {
        Ok(document) => document,
        Err(err) => {
            diagnostics.push_input("fixture", format!("{err:#}"));
            return None;
        }
    };
    match StaticPageSource::from_document(&document) {
        Ok(source) => Some(source),
        Err(err) => {
            diagnostics.push_input("fixture", format!("{}: {err}", path.display()));
            None
        }
    }
}

/// `shipping-notes` becomes `Shipping notes`.
fn menu_label(page_id: &str) -> String {
    let spaced = page_id.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Option<OutputOptions> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
        } else if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            let path = PathBuf::from(raw);
            if path.exists() && !cli.force {
                diagnostics.push_output(format!(
                    "file {} already exists (pass --force to overwrite)",
                    path.display()
                ));
            }
            destinations.push(OutputDestination::File(path));
        }
    }
    if destinations.is_empty() {
        if cli.format.is_some() {
            diagnostics.push_output("--format has no effect without --output");
        }
        return None;
    }

    let format = match cli.format.as_deref() {
        Some(name) => match DocumentFormat::from_name(name) {
            Some(format) => format,
            None => {
                diagnostics.push_output(format!(
                    "unsupported format '{name}'; this build supports {}",
                    format_list()
                ));
                return None;
            }
        },
        None => infer_format(&destinations, diagnostics),
    };

    Some(
        OutputOptions::new(format)
            .with_pretty(!cli.no_pretty)
            .with_destinations(destinations),
    )
}

/// Format shared by every output file extension; JSON for stdout-only or
/// extensionless outputs.
fn infer_format(
    destinations: &[OutputDestination],
    diagnostics: &mut DiagnosticCollector,
) -> DocumentFormat {
    let mut detected: Option<DocumentFormat> = None;
    for destination in destinations {
        let OutputDestination::File(path) = destination else {
            continue;
        };
        let Some(format) = DocumentFormat::from_path(path) else {
            continue;
        };
        match detected {
            Some(existing) if existing != format => diagnostics.push_output(format!(
                "output file {} uses {format} but other destinations use {existing}; align extensions",
                path.display()
            )),
            Some(_) => {}
            None => detected = Some(format),
        }
    }
    detected.unwrap_or_default()
}

fn format_list() -> String {
    DocumentFormat::available_formats()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
