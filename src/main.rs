use std::env;
use std::io::{self, Read};
use std::process;

use csvscan::{Config, DEFAULT_DELIMITER, DEFAULT_QUOTE, Parser};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args[1..]) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("csvscan: {}", e);
            process::exit(2);
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut delimiter = DEFAULT_DELIMITER.to_string();
    let mut quote = DEFAULT_QUOTE.to_string();
    let mut strict = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            print_help();
            return Ok(());
        }

        if arg == "--version" {
            println!("csvscan {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if arg == "-d" {
            i += 1;
            if i >= args.len() {
                return Err("option -d requires an argument".into());
            }
            delimiter = args[i].clone();
        } else if let Some(d) = arg.strip_prefix("-d") {
            delimiter = d.to_string();
        } else if arg == "-q" {
            i += 1;
            if i >= args.len() {
                return Err("option -q requires an argument".into());
            }
            quote = args[i].clone();
        } else if let Some(q) = arg.strip_prefix("-q") {
            quote = q.to_string();
        } else if arg == "--strict" {
            strict = true;
        } else {
            return Err(format!("unknown argument: {}", arg).into());
        }

        i += 1;
    }

    // An empty delimiter selects tab
    if delimiter.is_empty() {
        delimiter = "\t".to_string();
    }

    let config = Config::new(&delimiter, &quote)?.strict(strict);
    let parser = Parser::with_config(config);

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;

    let records = parser.parse_bytes(&input)?;
    println!("{:?}", records);

    Ok(())
}

fn print_help() {
    println!(
        r#"Usage: csvscan [OPTIONS] < input

Parse delimited text from stdin and print the records as nested arrays.

Options:
  -d delim       Field delimiter (default ","; empty means tab)
  -q quote       Quote character (default '"')
  --strict       Fail on unterminated quoted fields instead of skipping them
  --version      Print version information
  --help         Print this help message

Examples:
  printf 'a,b\nc,d' | csvscan
  csvscan -d ';' -q "'" < data.txt
  csvscan -d '' < table.tsv
"#
    );
}
