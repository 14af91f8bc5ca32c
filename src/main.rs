use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use vmess2clash::constants::DEFAULT_OUTPUT_FILE;
use vmess2clash::convert_link;
use vmess2clash::utils::write_atomically;

/// Convert a vmess:// subscription link into a Clash configuration file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The vmess:// link to convert; prompted for interactively if omitted
    #[arg(value_name = "LINK")]
    link: Option<String>,

    /// Output file path
    #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Parse command line arguments
    let args = Args::parse();

    let (link, output) = match args.link {
        Some(link) => (link, args.output),
        None => prompt_for_input().context("failed to read input")?,
    };

    let config = convert_link(&link)?;
    let yaml = serde_yaml::to_string(&config).context("failed to serialize configuration")?;

    write_atomically(Path::new(&output), &yaml)
        .with_context(|| format!("failed to write {}", output))?;

    info!("Clash configuration saved to {}", output);
    Ok(())
}

/// Asks for the link and output path on stdin, mirroring the CLI arguments.
/// An empty output answer falls back to the default filename.
fn prompt_for_input() -> io::Result<(String, String)> {
    let link = prompt("Enter a vmess link (starting with vmess://): ")?;
    let output = prompt(&format!(
        "Enter an output file name (default {}): ",
        DEFAULT_OUTPUT_FILE
    ))?;

    let output = if output.is_empty() {
        DEFAULT_OUTPUT_FILE.to_string()
    } else {
        output
    };
    Ok((link, output))
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
