use clap::{Parser, Subcommand};
use scholar_page::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scholar-page")]
#[command(about = "Static homepage generator for academic researchers")]
#[command(long_about = "\
Static homepage generator for academic researchers

One YAML document is the data source: your profile, a research statement,
a publication list, and optional news and miscellaneous sections. One run
renders one complete index.html.

Document structure (see `scholar-page gen-config` for a documented starter):

  publications.yaml
  ├── profile:            # name, title, advisor, contact links, photo
  ├── research:           # one-paragraph research statement
  ├── news:               # optional; omitted entirely when absent
  ├── publications:       # rendered in document order
  │   ├── authors:        # is_me marks you; url links a co-author
  │   ├── links:          # project / paper / arXiv / code / video / ...
  │   └── oral, spotlight, award, highlight flags
  └── miscellaneous:      # optional; sections of title/paragraph/items

The stylesheet (stylesheet.css), favicon, and all images are referenced by
relative path and are not generated — ship them next to index.html.")]
#[command(version)]
struct Cli {
    /// Path to the site document
    #[arg(long, default_value = "publications.yaml", global = true)]
    config: PathBuf,

    /// Output HTML file
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the homepage from the site document (the default)
    Build,
    /// Parse and report the site document without writing anything
    Check,
    /// Print a stock publications.yaml with all fields documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let rendered = generate::generate(&cli.config, &cli.output)?;
            output::print_build_output(&rendered.site, &cli.output, rendered.bytes_written);
        }
        Command::Check => {
            let site = config::load_config(&cli.config)?;
            output::print_site_summary(&site);
            println!("==> Site document is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_yaml());
        }
    }

    Ok(())
}
