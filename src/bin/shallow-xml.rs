//! Command-line interface for shallow-xml
//! Tokenizes an XML-like file (or stdin) and prints the token stream.
//!
//! Usage:
//!   shallow-xml `<path>` [--markup-only] [--merge-markers] [--format `<format>`] [--config `<file>`]
//!   shallow-xml                                           - read from stdin
//!
//! A `shallow.toml` in the working directory is picked up when present.
//! Set `RUST_LOG=shallow_xml=debug` to see tracing output on stderr.

use std::io::Read;

use clap::{Arg, ArgAction, Command};
use shallow_xml::config::{Loader, OutputFormat, ShallowConfig};
use shallow_xml::{Error, MatcherOptions, Segment, Token, Tokenizer};

fn main() {
    init_tracing();

    let matches = Command::new("shallow-xml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shallow tokenizer for XML-like text")
        .arg(
            Arg::new("path")
                .help("Path to the input file ('-' or absent reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("markup-only")
                .long("markup-only")
                .short('m')
                .help("Only emit markup tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("merge-markers")
                .long("merge-markers")
                .help("Group adjacent markup tokens into segments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (simple, json, yaml)")
                .value_parser(OutputFormat::NAMES.to_vec()),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./shallow.toml"),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config").map(String::as_str),
        MatcherOptions {
            markup_only: matches.get_flag("markup-only"),
            merge_markers: matches.get_flag("merge-markers"),
        },
        matches.get_one::<String>("format").map(String::as_str),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let path = matches.get_one::<String>("path").map(String::as_str);
    let source = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let output = render(&config, &source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_config(
    file: Option<&str>,
    options: MatcherOptions,
    format: Option<&str>,
) -> Result<ShallowConfig, Error> {
    let mut loader = Loader::in_dir(".");
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    loader = loader.with_options(options)?;
    if let Some(format) = format.and_then(OutputFormat::from_name) {
        loader = loader.with_format(format)?;
    }
    Ok(loader.build()?)
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn render(config: &ShallowConfig, source: &str) -> Result<String, Error> {
    let tokenizer = Tokenizer::xml(config.tokenizer);

    if config.tokenizer.merge_markers {
        let segments = tokenizer.segments(source);
        return match config.output.format {
            OutputFormat::Simple => Ok(segments
                .iter()
                .map(|segment| simple_segment(segment, source))
                .collect()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&segments)? + "\n"),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&segments)?),
        };
    }

    let tokens = tokenizer.analyze(source);
    match config.output.format {
        OutputFormat::Simple => Ok(tokens.iter().map(simple_token).collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&tokens)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&tokens)?),
    }
}

fn simple_token(token: &Token<'_>) -> String {
    format!("{}\n", token)
}

fn simple_segment(segment: &Segment<'_>, source: &str) -> String {
    match segment {
        Segment::Text(token) => simple_token(token),
        Segment::Markup { range, tokens } => format!(
            "markup[{}] {}..{} {:?}\n",
            tokens.len(),
            range.start,
            range.end,
            segment.lexeme(source)
        ),
    }
}
