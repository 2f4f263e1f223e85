use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
use xmlify::{to_xml_with_config, Filter, Header, Node, RenderConfig};

#[derive(Debug, Parser)]
#[command(name = "xmlify", version, about = "Render a JSON document as XML")]
struct Args {
    /// Input JSON file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Indent unit repeated per nesting level; enables pretty-printing
    #[arg(short, long, value_name = "UNIT")]
    indent: Option<String>,

    /// Emit the default XML declaration
    #[arg(long, conflicts_with = "header_text")]
    header: bool,

    /// Emit this declaration instead of the default one
    #[arg(long, value_name = "TEXT")]
    header_text: Option<String>,

    /// Escape XML special characters in text and attribute values
    #[arg(short, long)]
    escape: bool,
}

impl Args {
    fn config(&self) -> Result<RenderConfig> {
        let header = match (&self.header_text, self.header) {
            (Some(text), _) => Header::from(text.as_str()),
            (None, enabled) => Header::from(enabled),
        };
        let mut config = RenderConfig::new()
            .header(header)
            .indent(self.indent.clone().unwrap_or_default());
        if self.escape {
            config = config
                .text_filter(Filter::xml_text()?)
                .attribute_filter(Filter::xml_attribute()?);
        }
        Ok(config)
    }
}

fn main() {
    // Logs go to stderr so the document on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => {
            info!("Reading file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };

    let node = Node::from_json_str(&input)?;
    let xml = to_xml_with_config(&node, &args.config()?);

    match &args.output {
        Some(path) => {
            fs::write(path, &xml).with_context(|| format!("cannot write {}", path.display()))?;
            info!("Wrote {} bytes to {}", xml.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
