//! Mini-PL interpreter CLI.

use mpl_diagnostic::emitter::ColorMode;
use mplc::commands::{check_file, explain_error, lex_file, parse_file, run_paths};

fn main() {
    mplc::init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid value '{value}' for --color (expected auto, always, never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let ok = match command.as_str() {
        "run" => {
            if args.len() < 2 {
                eprintln!("Usage: mpl run <file-or-directory>...");
                std::process::exit(1);
            }
            run_paths(&args[1..], color)
        }
        "check" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: mpl check <file>");
                std::process::exit(1);
            };
            check_file(path, color)
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: mpl lex <file>");
                std::process::exit(1);
            };
            lex_file(path, color)
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: mpl parse <file>");
                std::process::exit(1);
            };
            parse_file(path, color)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: mpl explain <ERROR_CODE>");
                eprintln!("Example: mpl explain E2001");
                std::process::exit(1);
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("Mini-PL interpreter {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Mini-PL interpreter");
    println!();
    println!("Usage: mpl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <path>...        Interpret programs (directories run every file in them)");
    println!("  check <file>         Parse and type check without running");
    println!("  lex <file>           Print the token stream");
    println!("  parse <file>         Print the parsed program");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>       Color diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output on stderr (e.g. RUST_LOG=mpl_eval=trace)");
    println!();
    println!("Examples:");
    println!("  mpl run hello.mpl");
    println!("  mpl run programs/");
    println!("  mpl check --color=never broken.mpl");
    println!("  mpl explain E2005");
}
