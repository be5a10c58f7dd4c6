// crates/locate_function/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use line_index::{LineAccessor, LineIndex};
use locate_function::locate;
use signature_heuristics::matching_rule;
use std::fs;
use std::process;

fn main() -> Result<()> {
    let matches = Command::new("locate_function")
        .version("0.1.0")
        .about("Locates the function enclosing a byte offset in a source file")
        .arg(
            Arg::new("file")
                .required(true)
                .help("Source file to scan"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(usize))
                .help("Cursor position as a byte offset into the file"),
        )
        .arg(
            Arg::new("span_only")
                .long("span-only")
                .help("Print only the located span instead of the function text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Trace candidate lines and the selected span to stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").unwrap();
    let offset = *matches.get_one::<usize>("offset").unwrap();
    let span_only = *matches.get_one::<bool>("span_only").unwrap();
    let verbose = *matches.get_one::<bool>("verbose").unwrap();

    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;

    if offset > text.len() {
        eprintln!(
            "Error: offset {} is beyond the end of {} ({} bytes)",
            offset,
            file,
            text.len()
        );
        process::exit(1);
    }

    let index = LineIndex::new(&text);

    if verbose {
        let cursor_line = index.offset_to_position(offset).line;
        for line in (0..=cursor_line).rev() {
            if let Some(rule) = matching_rule(index.line_text(line).trim()) {
                eprintln!("[VERBOSE] Line {} looks like a signature ({} rule)", line, rule);
            }
        }
    }

    let range = match locate(&text, offset, &index) {
        Some(range) => range,
        None => {
            eprintln!("No enclosing function found at offset {}", offset);
            process::exit(1);
        }
    };

    let start = index.position_to_offset(range.start);
    let end = index.position_to_offset(range.end);

    if verbose {
        eprintln!(
            "[VERBOSE] Selected span {}..{} ({} bytes)",
            start,
            end,
            end - start
        );
    }

    if span_only {
        println!(
            "{}:{}..{}:{} (bytes {}..{})",
            range.start.line, range.start.column, range.end.line, range.end.column, start, end
        );
    } else {
        println!("{}", &text[start..end]);
    }

    Ok(())
}
