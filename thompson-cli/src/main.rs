use clap::Parser as ClapParser;
use std::process::ExitCode;
use thompson::Regex;

/// Checks whether a pattern matches a piece of text using a textbook
/// lex/parse/Thompson-construction/subset-construction regex engine.
#[derive(Debug, ClapParser)]
#[command(name = "thompson", version, about)]
struct Args {
    /// The pattern to compile. Supports literals, `|`, `*`, `(...)` and backtick escapes.
    pattern: String,
    /// The text to test the pattern against.
    text: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    log::debug!("compiling pattern {:?}", args.pattern);
    let regex = match Regex::new(&args.pattern) {
        Ok(regex) => regex,
        Err(e) => {
            log::error!("failed to compile {:?}: {e}", args.pattern);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "compiled to a DFA with {} state(s) over an alphabet of {} symbol(s)",
        regex.dfa().state_count(),
        regex.dfa().alphabet().len()
    );

    println!("pattern: {}", args.pattern);
    println!("text:    {}", args.text);

    if regex.is_match(&args.text) {
        println!("Match!");
    } else {
        println!("No match");
    }

    ExitCode::SUCCESS
}
