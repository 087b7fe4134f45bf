use clap::Parser;
use std::path::PathBuf;
use tierlist_manifest::{RunOptions, RunOutcome, config, output};

fn version_string() -> &'static str {
    let build = env!("TIERLIST_BUILD");
    if build.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        build
    }
}

#[derive(Parser)]
#[command(name = "tierlist-manifest")]
#[command(about = "Generate JSON manifests for a folder tree of tierlists")]
#[command(long_about = "\
Generate JSON manifests for a folder tree of tierlists

Folders with images become tierlists; folders holding only folders become
categories. Run from the project root with no arguments to scan 'tierlists/'.

  tierlists/
  ├── config.toml               # Optional: extensions and output file names
  ├── manifest.json             # Written: category tree + tierlist summaries
  ├── heroes/                   # Tierlist \"Heroes\"
  │   ├── manifest.json         # Written: id, name, images
  │   ├── thor.jpg              # heroes-1 \"Thor\"
  │   └── zeus.png              # heroes-2 \"Zeus\"
  └── maps/                     # Category \"Maps\"
      └── categoryA/            # Tierlist \"Category A\", id maps/categoryA
          └── forest.png

Hidden files and folders (starting with '.') are ignored.")]
#[command(version = version_string())]
struct Cli {
    /// Directory to scan
    #[arg(long, default_value = config::DEFAULT_ROOT)]
    root: PathBuf,

    /// Scan and print the tree without writing any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    println!("==> Scanning {}", cli.root.display());
    match tierlist_manifest::run(&cli.root, &options)? {
        RunOutcome::MissingRoot => {
            output::print_lines(&output::format_missing_root(&cli.root));
        }
        RunOutcome::NothingFound => {
            output::print_lines(&output::format_nothing_found(&cli.root));
        }
        RunOutcome::Checked(nodes) => {
            output::print_scan_output(&nodes);
            println!("==> Dry run: nothing written");
        }
        RunOutcome::Generated { nodes, summary } => {
            output::print_scan_output(&nodes);
            println!();
            output::print_generate_output(&summary, &cli.root);
        }
    }

    Ok(())
}
