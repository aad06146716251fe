use std::fs;

use clap::Parser;
use rubyish::run;

/// rubyish runs programs written in a small, Ruby-flavored scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rubyish to treat the contents as a path and run that file.
    #[arg(short, long)]
    file: bool,

    /// Program source, or a file path when `--file` is given.
    contents: String,
}

/// Installs a tracing subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script, std::io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
