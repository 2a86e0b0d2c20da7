//! markdown2html CLI - convert a Markdown file to an HTML fragment file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use markdown2html::{Options, convert_file};

#[derive(Parser, Debug)]
#[command(name = "markdown2html", version, about)]
struct Cli {
    /// Markdown file to read
    #[arg(value_name = "input_file")]
    input: PathBuf,

    /// HTML file to write
    #[arg(value_name = "output_file")]
    output: PathBuf,

    /// Render every list as <ul>, regardless of its marker
    #[arg(long)]
    conventional_lists: bool,

    /// Spaces prepended to the first line of each paragraph
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let options = Options {
        legacy_list_kinds: !cli.conventional_lists,
        paragraph_indent: cli.indent,
    };

    match convert_file(&cli.input, &cli.output, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
