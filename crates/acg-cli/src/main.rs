use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use acg_core::config::{self, AcgConfig, CONFIG_FILE_NAME};
use acg_core::{CodeGenerator, GeneratedFile, merge, resolve};
use acg_fetch::FetchedSchema;
use acg_node_client::{ClientContext, NodeClientGenerator};

#[derive(Parser)]
#[command(name = "acg", about = "OpenAPI to Node.js API client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client from direct schema URLs
    Generate {
        /// Schema URLs; defaults to `schemas` from the config file
        #[arg(short, long = "url")]
        urls: Vec<String>,
    },

    /// Locate schema links on documentation pages, then generate
    Scrape {
        /// Documentation pages; defaults to `docs_pages` from the config file
        #[arg(short, long = "page")]
        pages: Vec<String>,
    },

    /// Fetch and check schemas without writing any output
    Validate {
        /// Schema URLs; defaults to `schemas` from the config file
        #[arg(short, long = "url")]
        urls: Vec<String>,
    },

    /// Print a summary of the merged operations
    Inspect {
        /// Schema URLs; defaults to `schemas` from the config file
        #[arg(short, long = "url")]
        urls: Vec<String>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new acg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { urls } => cmd_generate(urls).await,

        Commands::Scrape { pages } => cmd_scrape(pages).await,

        Commands::Validate { urls } => cmd_validate(urls).await,

        Commands::Inspect { urls, format } => cmd_inspect(urls, format).await,

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "acg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the project config from the current directory, or fall back to the
/// defaults.
fn try_load_config() -> Result<AcgConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let loaded = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    Ok(loaded.unwrap_or_default())
}

fn pick_sources(from_args: Vec<String>, from_config: &[String], what: &str) -> Result<Vec<String>> {
    let sources = if from_args.is_empty() {
        from_config.to_vec()
    } else {
        from_args
    };
    anyhow::ensure!(
        !sources.is_empty(),
        "no {what} given; pass them on the command line or add them to {CONFIG_FILE_NAME}"
    );
    Ok(sources)
}

/// Fetch every schema document named by `urls`, in order.
async fn fetch(urls: &[String]) -> Result<Vec<FetchedSchema>> {
    let client = acg_fetch::http_client()?;
    let urls = acg_fetch::parse_urls(urls)?;
    let fetched = acg_fetch::fetch_documents(&client, &urls).await?;
    Ok(fetched)
}

/// Merge the fetched documents and synthesize the three artifacts.
///
/// Everything is assembled in memory; nothing touches the filesystem here,
/// so an aborted synthesis leaves no partial output behind.
fn synthesize(fetched: &[FetchedSchema], cfg: &AcgConfig) -> Result<Vec<GeneratedFile>> {
    let title = fetched
        .first()
        .map(|schema| schema.doc.info.title.clone())
        .context("no schema documents fetched")?;
    let sources: Vec<String> = fetched.iter().map(|s| s.url.to_string()).collect();

    let paths = merge::merge_paths(fetched.iter().map(|s| s.doc.clone()));
    let ctx = ClientContext::from_config(cfg, &title, sources);

    let files = NodeClientGenerator.generate(&paths, &ctx)?;
    Ok(files)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// The direct-URL pipeline: fetch, synthesize, then write once at the end.
async fn run_generate(urls: &[String], cfg: &AcgConfig, out_dir: &Path) -> Result<()> {
    let fetched = fetch(urls).await?;
    let files = synthesize(&fetched, cfg)?;
    write_files(out_dir, &files)?;
    eprintln!("Generated {} files in {}", files.len(), out_dir.display());
    Ok(())
}

/// The scrape pipeline: discover schema links, fetch them, synthesize, then
/// persist the raw schema copies next to the generated artifacts.
async fn run_scrape(pages: &[String], cfg: &AcgConfig, out_dir: &Path) -> Result<()> {
    let client = acg_fetch::http_client()?;
    let pages = acg_fetch::parse_urls(pages)?;

    let schema_urls = acg_fetch::discover_schema_urls(&client, &pages).await?;
    eprintln!("  discovered {} schema link(s)", schema_urls.len());

    let fetched = acg_fetch::fetch_documents(&client, &schema_urls).await?;
    let files = synthesize(&fetched, cfg)?;

    acg_fetch::save_raw_documents(&out_dir.join(&cfg.schema_dir), &fetched)?;
    write_files(out_dir, &files)?;
    eprintln!("Generated {} files in {}", files.len(), out_dir.display());
    Ok(())
}

async fn cmd_generate(urls: Vec<String>) -> Result<()> {
    let cfg = try_load_config()?;
    let urls = pick_sources(urls, &cfg.schemas, "schema URLs")?;
    let out_dir = PathBuf::from(&cfg.output);
    run_generate(&urls, &cfg, &out_dir).await
}

async fn cmd_scrape(pages: Vec<String>) -> Result<()> {
    let cfg = try_load_config()?;
    let pages = pick_sources(pages, &cfg.docs_pages, "documentation pages")?;
    let out_dir = PathBuf::from(&cfg.output);
    run_scrape(&pages, &cfg, &out_dir).await
}

async fn cmd_validate(urls: Vec<String>) -> Result<()> {
    let cfg = try_load_config()?;
    let urls = pick_sources(urls, &cfg.schemas, "schema URLs")?;

    let fetched = fetch(&urls).await?;
    for schema in &fetched {
        eprintln!(
            "Valid schema: {} ({} paths) from {}",
            schema.doc.info.title,
            schema.doc.paths.len(),
            schema.url
        );
    }

    // Dry-run the resolution step so body-schema violations surface here too
    let paths = merge::merge_paths(fetched.iter().map(|s| s.doc.clone()));
    let mut operations = 0usize;
    for (path, item) in &paths {
        for (verb, op) in item.operations() {
            resolve::operation_id(path, verb, op)?;
            resolve::required_parameters(path, verb, op)?;
            operations += 1;
        }
    }
    eprintln!("  Operations: {operations}");
    eprintln!("Validation successful.");
    Ok(())
}

async fn cmd_inspect(urls: Vec<String>, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?;
    let urls = pick_sources(urls, &cfg.schemas, "schema URLs")?;

    let fetched = fetch(&urls).await?;
    let title = fetched
        .first()
        .map(|schema| schema.doc.info.title.clone())
        .context("no schema documents fetched")?;
    let paths = merge::merge_paths(fetched.iter().map(|s| s.doc.clone()));

    let summary = build_inspect_summary(&title, &paths)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(
    title: &str,
    paths: &indexmap::IndexMap<String, acg_core::parse::operation::PathItem>,
) -> Result<serde_json::Value> {
    let mut operations = Vec::new();
    for (path, item) in paths {
        for (verb, op) in item.operations() {
            let name = resolve::operation_id(path, verb, op)?;
            let required = resolve::required_parameters(path, verb, op)?;
            operations.push(serde_json::json!({
                "name": name,
                "method": verb.as_str(),
                "path": path,
                "required": required.iter().map(|p| p.name.clone()).collect::<Vec<_>>(),
            }));
        }
    }

    Ok(serde_json::json!({
        "title": title,
        "paths": paths.len(),
        "operations": operations,
    }))
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
