//! CLI demo: takes a pattern as the first argument and zero or more
//! input strings as the remaining arguments; for each input prints
//! `MATCH`/`NO-MATCH` and any non-empty captures as `i: b--e 'slice'`.

use std::env;
use std::process::ExitCode;

use bytenfa::Regex;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(pattern) = args.next() else {
        eprintln!("usage: bytenfa <pattern> [input ...]");
        return ExitCode::FAILURE;
    };

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for input in args {
        match re.find_captures(input.as_str()) {
            Some(caps) => {
                println!("MATCH");
                for i in 0..caps.group_len() {
                    if let Some(m) = caps.get(i) {
                        if !m.span.empty() {
                            println!(
                                "{}: {}--{} '{}'",
                                i,
                                m.span.from,
                                m.span.to,
                                String::from_utf8_lossy(m.slice())
                            );
                        }
                    }
                }
            }
            None => println!("NO-MATCH"),
        }
    }

    ExitCode::SUCCESS
}
