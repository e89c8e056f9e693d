use clap::Parser;
use formgen::error::Error;
use formgen::generator::RowGenerator;
use formgen::tables::Tables;
use formgen::write;
use std::io;
use std::path::PathBuf;

type Result<T, E = Error> = core::result::Result<T, E>;

/// Generate a CSV of fake mentoring form submissions.
#[derive(Parser)]
#[command(name = "formgen", version)]
struct Cli {
    /// Output CSV path, `-` for stdout
    output: PathBuf,

    /// Number of data rows
    #[arg(short = 'n', long = "rows", default_value_t = 100)]
    rows: usize,

    /// Referred entries get a random promotion year instead of the current one
    #[arg(short = 'r', long = "referred")]
    referred: bool,

    /// Seed for reproducible output
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Suppress progress messages
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut generator = match cli.seed {
        Some(seed) => RowGenerator::seeded(Tables::DEFAULT, seed)?,
        None => RowGenerator::from_entropy(Tables::DEFAULT)?,
    };

    if cli.output.as_os_str() == "-" {
        let stdout = io::stdout();
        return write::write_rows(stdout.lock(), &mut generator, cli.rows, cli.referred);
    }

    write::write_file_with(&cli.output, &mut generator, cli.rows, cli.referred)?;
    if !cli.quiet {
        println!(
            "Wrote {} {} rows to {}",
            cli.rows,
            if cli.referred { "referred" } else { "direct" },
            cli.output.display()
        );
    }
    Ok(())
}
