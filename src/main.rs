use awesome_compile::{config, generate, group, output, scan, validate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "awesome-compile")]
#[command(about = "Compile an awesome-list catalog into a markdown document")]
#[command(long_about = "\
Compile an awesome-list catalog into a markdown document

Metadata and categories live in the meta directory, one YAML file per item
lives in the data directory. The file name of an item is its slug.

Catalog structure:

  meta/
  ├── info.yml                 # name, description, badges, position_order, footer
  └── categories.yml           # ordered list: bare names or {id, name} records
  data/
  ├── ripgrep.yml              # name, url, oneliner, main_category, position, ...
  └── fd.yml
  config.yml                   # optional: output, review_links_enabled

Items are grouped by main_category. Within a category they are ordered by
their position in info.yml's position_order (unknown positions last), then
by name, case-insensitively.

Run 'awesome-compile gen-config' to print a documented config.yml.")]
#[command(version)]
struct Cli {
    /// Directory containing one <slug>.yml per item
    #[arg(long, default_value = "data", global = true)]
    data: PathBuf,

    /// Directory containing info.yml and categories.yml
    #[arg(long, default_value = "meta", global = true)]
    meta: PathBuf,

    /// Output path for the generated document (overridden by config.yml `output`)
    #[arg(long, default_value = "readme.md", global = true)]
    out: PathBuf,

    /// Optional run configuration file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Print the effective output path and exit (for CI)
    #[arg(long)]
    print_out: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Load, validate and render the catalog (default)
    Build,
    /// Load and validate the catalog without writing anything
    Check,
    /// Print the loaded catalog as JSON
    Manifest,
    /// Print a stock config.yml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("awesome-compile: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::path::absolute(&cli.config)?;
    let run_config = config::load_run_config(&config_path);
    let out = std::path::absolute(config::resolve_output_path(&cli.out, run_config.as_ref()))?;

    if cli.print_out {
        println!("{}", out.display());
        return Ok(());
    }

    let meta = std::path::absolute(&cli.meta)?;
    let data = std::path::absolute(&cli.data)?;

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let catalog = load_and_validate(&meta, &data)?;

            let review_links = run_config.is_some_and(|c| c.review_links_enabled);
            let grouped =
                group::group_by_main_category(&catalog.info, &catalog.categories, &catalog.items);
            let document =
                generate::render(&catalog.info, &catalog.categories, &grouped, review_links);

            println!("==> Writing {}", out.display());
            generate::write_document(&out, &document)?;
            output::print_generate_output(&catalog.categories, &grouped, &out);
        }
        Command::Check => {
            load_and_validate(&meta, &data)?;
            println!("==> Catalog is valid");
        }
        Command::Manifest => {
            let catalog = scan::scan(&meta, &data)?;
            let json = serde_json::to_string_pretty(&catalog.to_manifest())?;
            println!("{}", json);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_yaml());
        }
    }

    Ok(())
}

/// Stages 1 and 2: load the catalog, then fail with every validation error.
fn load_and_validate(
    meta: &Path,
    data: &Path,
) -> Result<scan::Catalog, Box<dyn std::error::Error>> {
    println!("==> Loading {} and {}", meta.display(), data.display());
    let catalog = scan::scan(meta, data)?;
    output::print_scan_output(&catalog);

    println!("==> Validating");
    let errors = validate::validate(&catalog.info, &catalog.categories, &catalog.items);
    if !errors.is_empty() {
        output::print_validation_errors(&errors);
        return Err(format!("validation failed: {} error(s)", errors.len()).into());
    }
    Ok(catalog)
}
