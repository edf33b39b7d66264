use std::env;
use std::process;

use drop_chess::cli::shell::run_stdio_loop;

fn main() {
    let mut seed = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => match args.next().map(|value| value.parse::<u64>()) {
                Some(Ok(value)) => seed = Some(value),
                _ => {
                    eprintln!("usage: drop_chess [--seed <u64>]");
                    process::exit(2);
                }
            },
            other => {
                eprintln!("unknown argument '{other}'");
                eprintln!("usage: drop_chess [--seed <u64>]");
                process::exit(2);
            }
        }
    }

    if let Err(error) = run_stdio_loop(seed) {
        eprintln!("io error: {error}");
        process::exit(1);
    }
}
