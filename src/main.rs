use clap::Parser;
use uselesscalc::{
    interpreter::engine::{Engine, UNRECOGNIZED_MARKER},
    shell::{Shell, ShellConfig},
};

/// uselesscalc adds or subtracts two non-negative integers, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text printed for input that is not a supported operation.
    #[arg(long, default_value = UNRECOGNIZED_MARKER)]
    marker: String,

    /// Do not print the banner before each prompt.
    #[arg(long)]
    no_banner: bool,

    /// Print an error and the usage help after an unrecognized input.
    #[arg(long)]
    strict: bool,

    /// Evaluate these expressions, print their results and exit instead of
    /// starting the interactive loop.
    expressions: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let shell = Shell::new(Engine::with_marker(args.marker),
                           ShellConfig { banner: !args.no_banner,
                                         strict: args.strict, });

    if !args.expressions.is_empty() {
        for result in shell.evaluate_all(args.expressions.as_slice()) {
            println!("{result}");
        }
        return;
    }

    if let Err(e) = shell.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
