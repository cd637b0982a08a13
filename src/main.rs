use clap::{Parser, Subcommand};
use cms_nav::config::{self, NavConfig};
use cms_nav::navigation::{BuildReport, build_header};
use cms_nav::render::{RenderContext, render};
use cms_nav::routes::RouteTable;
use cms_nav::{html, input, output};
use std::path::PathBuf;

/// Where the CMS exports live.
#[derive(clap::Args, Clone)]
struct InputArgs {
    /// Header global exported from the CMS
    #[arg(long, default_value = "header.json")]
    header: PathBuf,

    /// Routable documents as a JSON array of {collection, id, slug}
    #[arg(long)]
    documents: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "cms-nav")]
#[command(about = "Resolve and render CMS header navigation")]
#[command(long_about = "\
Resolve and render CMS header navigation

Reads the header global exported from the CMS, resolves internal references
to paths, drops links that can't be resolved, and renders the rest as an
accessible <nav> with a trailing search link.

Link kinds (exactly one per nav item):
  reference   { \"relationTo\": \"pages\", \"value\": 12, \"anchor\": \"team\" }
  url         \"/about\", \"https://example.com\" (\"newTab\": true adds rel=noopener noreferrer)
  anchor      \"contact\" → #contact

Run 'cms-nav gen-config' to generate a documented nav.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing nav.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation as HTML (skipped links are reported on stderr)
    Render {
        #[command(flatten)]
        exports: InputArgs,

        /// Path of the page being rendered, marked with aria-current
        #[arg(long)]
        current: Option<String>,

        /// Print rendered elements as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Build the navigation and report every skipped or duplicate link
    Check(InputArgs),
    /// Print a stock nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            exports,
            current,
            json,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let report = build_from(&exports, &config)?;
            output::print_problems(&report);

            let context = RenderContext {
                current_path: current,
                search: config.search.clone(),
            };
            let elements = render(&report.links, &context);
            if json {
                println!("{}", serde_json::to_string_pretty(&elements)?);
            } else {
                println!(
                    "{}",
                    html::render_header_nav(&elements, &config.nav).into_string()
                );
            }
        }
        Command::Check(exports) => {
            let config = config::load_config(&cli.config_dir)?;
            println!("==> Checking {}", exports.header.display());
            let report = build_from(&exports, &config)?;
            output::print_build_report(&report);
            if !report.skipped.is_empty() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the exports and build the navigation list against the route table.
fn build_from(
    args: &InputArgs,
    config: &NavConfig,
) -> Result<BuildReport, Box<dyn std::error::Error>> {
    let header = input::load_header(&args.header)?;
    let documents = match &args.documents {
        Some(path) => input::load_documents(path)?,
        None => Vec::new(),
    };
    let routes = RouteTable::new(&config.routes).with_documents(documents);
    Ok(build_header(&header, &routes))
}
