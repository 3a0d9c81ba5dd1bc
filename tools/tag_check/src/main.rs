use getopts::{Matches, Options};
use html_tag_validator::{validate_bytes, Settings, ValidationError};
use std::env::args;
use std::fs;
use std::process::ExitCode;

const USAGE_ERROR: u8 = 2;

fn parse_options() -> Result<Matches, ExitCode> {
    let mut opts = Options::new();

    opts.optflag(
        "s",
        "strict",
        "Require void elements to be self-closed, e.g. `<br/>`",
    );
    opts.optopt("e", "encoding", "Encoding of the input files (default: utf-8)", "LABEL");
    opts.optflag("h", "help", "Show this help");

    let usage = opts.usage("Usage: tag_check [options] FILE...");

    match opts.parse(args().skip(1)) {
        Ok(matches) if matches.opt_present("h") => {
            println!("{usage}");
            Err(ExitCode::SUCCESS)
        }
        Ok(matches) if matches.free.is_empty() => {
            eprintln!("Missing input files\n\n{usage}");
            Err(ExitCode::from(USAGE_ERROR))
        }
        Ok(matches) => Ok(matches),
        Err(e) => {
            eprintln!("{e}\n\n{usage}");
            Err(ExitCode::from(USAGE_ERROR))
        }
    }
}

fn main() -> ExitCode {
    let matches = match parse_options() {
        Ok(matches) => matches,
        Err(code) => return code,
    };

    let encoding = matches
        .opt_str("e")
        .unwrap_or_else(|| String::from("utf-8"));

    let settings = Settings::new().strict_self_closing_tags(matches.opt_present("s"));
    let mut has_defects = false;

    for path in &matches.free {
        let input = match fs::read(path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{path}: {e}");
                return ExitCode::from(USAGE_ERROR);
            }
        };

        match validate_bytes(&input, &encoding, settings) {
            Ok(()) => println!("{path}: ok"),
            Err(ValidationError::Defect(defect)) => {
                has_defects = true;
                println!("{path}: {defect}");
            }
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(USAGE_ERROR);
            }
        }
    }

    if has_defects {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
