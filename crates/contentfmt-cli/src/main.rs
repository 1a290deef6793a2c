use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use contentfmt_config::Config;
use contentfmt_engine::about::AboutPage;
use contentfmt_engine::cache::TtlCache;
use contentfmt_engine::io;
use contentfmt_engine::migrate::{ContentRecord, migrate_records};
use contentfmt_engine::{Converted, Dialect, Document, convert_with, render};
use std::path::{Path, PathBuf};

/// Converts authored content into editor JSON and HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/contentfmt/config.toml
    #[arg(long, global = true, env = "CONTENTFMT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single source file and print the result
    Convert {
        file: PathBuf,
        #[arg(long)]
        dialect: Option<Dialect>,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Re-render HTML from a stored document
    Render { file: PathBuf },
    /// Convert every source file under a directory
    Batch {
        /// Defaults to `content_root` from the config file
        dir: Option<PathBuf>,
        /// Output directory, defaults to the source directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fill in missing contentJson/contentHtml on a JSON array of records
    Migrate {
        records: PathBuf,
        #[arg(long)]
        dialect: Option<Dialect>,
        /// Write the updated records back to the file
        #[arg(long)]
        write: bool,
    },
    /// Convert a legacy about page into a document
    About {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Write a config file holding the default settings
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Html,
    Json,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = match cli.command {
        Command::Init { .. } => Config::default(),
        _ => Config::load_or_default(&config_path)?,
    };
    log::debug!("Config path: {}", config_path.display());

    match cli.command {
        Command::Convert {
            file,
            dialect,
            format,
        } => convert_file(&config, &file, dialect, format),
        Command::Render { file } => render_file(&file),
        Command::Batch { dir, out } => {
            let Some(dir) = dir.or_else(|| config.content_root.clone()) else {
                bail!(
                    "No directory given and no content_root in {}",
                    config_path.display()
                );
            };
            let out = out.unwrap_or_else(|| dir.clone());
            batch(&config, &dir, &out)
        }
        Command::Migrate {
            records,
            dialect,
            write,
        } => migrate_file(&config, &records, dialect.unwrap_or(config.dialect), write),
        Command::About { file, format } => about_file(&file, format),
        Command::Init { force } => init_config(&config_path, force),
    }
}

/// Picks the dialect from the flag, then the file extension, then the config.
fn dialect_for(config: &Config, path: &Path, flag: Option<Dialect>) -> Dialect {
    flag.or_else(|| io::source_dialect(path))
        .unwrap_or(config.dialect)
}

fn print_converted(out: &Converted, format: Format) -> Result<()> {
    match format {
        Format::Html => println!("{}", out.html),
        Format::Json => println!("{}", serde_json::to_string_pretty(&out.document)?),
        Format::Both => println!("{}", serde_json::to_string_pretty(out)?),
    }
    Ok(())
}

fn convert_file(config: &Config, file: &Path, dialect: Option<Dialect>, format: Format) -> Result<()> {
    let dialect = dialect_for(config, file, dialect);
    let body = io::read_body(file, dialect)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let out = convert_with(body.as_str(), dialect, &config.options)?;
    print_converted(&out, format)
}

fn render_file(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc: Document = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a stored document", file.display()))?;

    println!("{}", render(&doc));
    Ok(())
}

fn batch(config: &Config, dir: &Path, out: &Path) -> Result<()> {
    let files = io::scan_source_files(dir)?;
    // Cross-posted content often repeats verbatim across files
    let cache: TtlCache<(Dialect, String), Converted> = TtlCache::new(config.cache_ttl());

    for file in &files {
        let body = file.read_body(dir)?;
        let converted = cache.get_or_load((file.dialect, body), |(dialect, body)| {
            convert_with(body.as_str(), *dialect, &config.options)
        })?;

        file.write_converted(out, &converted)?;
        log::info!("Converted {} ({})", file.path, file.dialect);
    }

    println!("Converted {} files into {}", files.len(), out.display());
    Ok(())
}

fn migrate_file(config: &Config, path: &Path, dialect: Dialect, write: bool) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut records: Vec<ContentRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))?;

    let report = migrate_records(&mut records, dialect, &config.options);

    println!(
        "{} records: {} converted, {} re-rendered, {} skipped, {} failed",
        report.total(),
        report.converted,
        report.rendered,
        report.skipped,
        report.failed.len()
    );
    for failure in &report.failed {
        eprintln!("  {}: {}", failure.id, failure.error);
    }

    if write && report.updated() > 0 {
        std::fs::write(path, serde_json::to_string_pretty(&records)?)?;
        println!("Wrote {}", path.display());
    }

    if !report.failed.is_empty() {
        bail!("{} records failed to migrate", report.failed.len());
    }
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to replace it",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn about_file(file: &Path, format: Format) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let page: AboutPage = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not an about page", file.display()))?;

    let document = page.to_document();
    let html = render(&document);
    print_converted(&Converted { document, html }, format)
}
