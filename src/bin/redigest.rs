use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{debug, error};

use redigest::report::ReportFormat;
use redigest::DigestOpts;

/// redigest CLI
#[derive(Parser)]
#[command(name = "redigest")]
#[command(version)]
#[command(about = "Simulate a restriction digest of a DNA sequence", long_about = None)]
struct Cli {
    /// DNA sequence file (plain text; case, whitespace and non-ACGT characters are ignored)
    dna_file: PathBuf,

    /// Enzyme table: one `name,motif` (or tab separated) record per line; `#` comments allowed
    enzyme_file: PathBuf,

    /// Digest only with these enzymes (repeatable; default: every enzyme in the table)
    #[arg(short, long = "enzyme", value_name = "NAME")]
    enzymes: Vec<String>,

    /// Output format: text, sites (CSV) or fragments (CSV)
    #[arg(long, default_value = "text")]
    format: ReportFormat,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument | ErrorKind::TooManyValues => {
                println!("{}", Cli::command().render_usage());
                std::process::exit(1);
            }
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    let opts = DigestOpts {
        dna_file: cli.dna_file,
        enzyme_file: cli.enzyme_file,
        enzymes: cli.enzymes,
        format: cli.format,
    };
    debug!("redigest {} | {:?}", redigest::VERSION, opts);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = redigest::run(&opts, &mut out) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
