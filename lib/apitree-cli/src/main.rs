#![allow(missing_docs)]
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use apitree_core::{Document, FolderStrategy, SkeletonConfig, ToYaml, generate_skeleton};
use tracing::{debug, warn};

fn main() -> Result<()> {
    let args = AppArgs::parse().context("parsing arguments")?;

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !args.remaining.is_empty() {
        warn!(remaining = ?args.remaining, "Warning: unused arguments left");
    }

    let document = read_document(&args.input)
        .with_context(|| format!("reading document {}", args.input.display()))?;
    let tree = generate_skeleton(&document, &args.config);
    debug!(nodes = tree.node_count(), "tree generated");

    let output = match args.format {
        OutputFormat::Outline => tree.outline(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&tree).context("serializing to JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => tree.to_yaml().context("serializing to YAML")?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}

fn read_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).context("reading file")?;
    let is_yaml = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

    let document = if is_yaml {
        Document::from_yaml(&content)?
    } else {
        Document::from_json(&content)?
    };
    Ok(document)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Outline,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "outline" => Ok(Self::Outline),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => bail!("unknown format '{value}', expected one of: outline, json, yaml"),
        }
    }
}

#[derive(Debug)]
struct AppArgs {
    input: PathBuf,
    config: SkeletonConfig,
    format: OutputFormat,
    verbose: bool,
    remaining: Vec<std::ffi::OsString>,
}

impl AppArgs {
    fn parse() -> Result<Self> {
        let mut pargs = pico_args::Arguments::from_env();

        let include_webhooks = pargs.contains("--include-webhooks");
        let exclude_deprecated = pargs.contains("--exclude-deprecated");
        let verbose = pargs.contains(["-v", "--verbose"]);

        let folder_strategy: Option<FolderStrategy> = pargs
            .opt_value_from_str(["-s", "--folder-strategy"])
            .context("parsing folder strategy argument")?;

        let format: Option<OutputFormat> = pargs
            .opt_value_from_str(["-f", "--format"])
            .context("parsing format argument")?;

        let input: PathBuf = pargs
            .free_from_str()
            .context("parsing input document path")?;

        let config = SkeletonConfig::new(folder_strategy.unwrap_or_default())
            .with_webhooks(include_webhooks)
            .with_deprecated(!exclude_deprecated);

        Ok(Self {
            input,
            config,
            format: format.unwrap_or(OutputFormat::Outline),
            verbose,
            remaining: pargs.finish(),
        })
    }
}
