use std::path::PathBuf;

use clap::Parser;
use scaffold::{Outcome, SITE_DIR, ScaffoldError, Stamp, generate};

#[derive(Parser, Debug)]
#[command(name = "scaffold", about = "Generate the Wulkan Kibo site skeleton")]
struct Cli {
    /// Overwrite files that already exist.
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Directory that receives the site folder.
    #[arg(long, env = "SCAFFOLD_ROOT", default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), ScaffoldError> {
    let cli = Cli::parse();
    let stamp = Stamp::now()?;
    let report = generate(&cli.root, cli.force, &stamp)?;

    if report.root_created {
        println!("CREATED ROOT: {SITE_DIR}");
    } else {
        println!("Using existing folder: {SITE_DIR}");
    }
    for (rel, outcome) in &report.files {
        println!("{outcome}: {rel}");
    }
    println!(
        "\n{} created, {} overwritten, {} skipped.",
        report.count(Outcome::Created),
        report.count(Outcome::Overwritten),
        report.count(Outcome::Skipped)
    );
    println!("Next steps:");
    println!("1) cd {SITE_DIR}");
    println!("2) Replace placeholder files with your real HTML/CSS/JS and assets.");
    println!("3) Preview with `SITE_DIR=. wulkan-kibo` from the parent directory.");
    println!("Tip: run `scaffold --force` to regenerate placeholders (overwrites).");
    Ok(())
}
