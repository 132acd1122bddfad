use clap::Parser;
use std::fs;
use std::io::{self, Read};
use textsim_text::segment;

/// Split a text file (or stdin) into sentence spans, printed as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text file. If not provided, reads from stdin.
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let text = if let Some(input_path) = args.input {
        fs::read_to_string(input_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let spans = segment(&text);

    let json = if args.pretty {
        serde_json::to_string_pretty(&spans)
    } else {
        serde_json::to_string(&spans)
    }
    .map_err(io::Error::other)?;

    println!("{json}");
    Ok(())
}
