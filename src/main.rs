//! foldout - single-page documentation generator

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use foldout::compile::{self, PageConfig};
use foldout::page::{self, DEFAULT_CSS, DEFAULT_TEMPLATE, LogoSource};
use foldout::{Error, Result};

#[derive(Parser)]
#[command(name = "foldout")]
#[command(version, about = "Fold a directory of Markdown into one HTML page", long_about = None)]
#[command(after_help = "EXAMPLES:
    foldout -i docs -o site/index.html    Build a page from ./docs
    foldout -i docs --outline             Print the heading forest as JSON")]
struct Cli {
    /// Directory scanned recursively for Markdown files
    #[arg(short, long, default_value = "./content", value_name = "DIR")]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html", value_name = "FILE")]
    output: PathBuf,

    /// Page title
    #[arg(long, default_value = "Foldout Docs")]
    title: String,

    /// Page template overriding the built-in one
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Stylesheet overriding the built-in one
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Logo SVG file (default: logo.svg in the input directory, if present)
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// URL opened when the logo is clicked
    #[arg(long, default_value = "/", value_name = "URL")]
    logo_link: String,

    /// Print the heading forest as JSON instead of writing a page
    #[arg(long)]
    outline: bool,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let markdown = compile::collect_markdown(&cli.input)?;

    if cli.outline {
        let forest = compile::compile_outline(&markdown)?;
        let json = serde_json::to_string_pretty(&forest).expect("outline serializes");
        println!("{json}");
        return Ok(());
    }

    let template = read_override(cli.template.as_deref(), DEFAULT_TEMPLATE)?;
    let css = read_override(cli.css.as_deref(), DEFAULT_CSS)?;
    let logo = page::resolve_logo(match &cli.logo {
        Some(path) => LogoSource::Explicit(path),
        None => LogoSource::Auto(&cli.input),
    })?;

    let config = PageConfig {
        title: cli.title.clone(),
        logo_link: cli.logo_link.clone(),
    };
    let html = compile::compile_page(&markdown, &template, &css, &logo, &config)?;

    fs::write(&cli.output, html).map_err(|source| Error::Write {
        path: cli.output.clone(),
        source,
    })?;

    if !cli.quiet {
        println!("Done! Generated -> {}", cli.output.display());
    }
    Ok(())
}

fn read_override(path: Option<&Path>, default: &str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(default.to_string()),
    }
}
