// Command-line interface for mailmark
//
// This binary is the thin caller around mailmark-render: it gathers the body text and the
// metric card fields from files, stdin or flags, renders them, and writes the HTML out.
// All parsing and rendering lives in the library.
//
// Usage:
//  mailmark render [<body>] [--title <t>] [--description-file <f>] [-o <file>]  - Render body text
//  mailmark card [--title <t>] [--description <d>] [-o <file>]                 - Render only the metric card
//  mailmark inspect <body> [<view>]                                            - Show the parsed model
//  mailmark --list-views                                                       - List inspection views
//
// A body of "-" (or none, for render) is read from stdin.
//
// Extra Parameters:
//
// Config keys can be overridden with --extra-<parameter-name> <value>.
// Example:
//  mailmark render body.txt --extra-fallback-title "Weekly KPI" --extra-output document

use mailmark_cli::error::CliError;
use mailmark_cli::views;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mailmark_config::{Loader, MailmarkConfig, OutputMode};
use mailmark_render::{templates, MetricCardInput, Renderer};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn metric_args() -> [Arg; 4] {
    [
        Arg::new("title")
            .long("title")
            .short('t')
            .help("Metric card title")
            .conflicts_with("title-file")
            .global(true),
        Arg::new("title-file")
            .long("title-file")
            .value_name("PATH")
            .help("Read the metric card title from a file")
            .value_hint(ValueHint::FilePath)
            .global(true),
        Arg::new("description")
            .long("description")
            .short('d')
            .help("Metric card description")
            .conflicts_with("description-file")
            .global(true),
        Arg::new("description-file")
            .long("description-file")
            .value_name("PATH")
            .help("Read the metric card description from a file (multi-line)")
            .value_hint(ValueHint::FilePath)
            .global(true),
    ]
}

fn output_args() -> [Arg; 2] {
    [
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath),
        Arg::new("document")
            .long("document")
            .help("Wrap the fragment in a standalone HTML document")
            .action(ArgAction::SetTrue),
    ]
}

fn build_cli() -> Command {
    Command::new("mailmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render mailmark text into email-safe HTML")
        .long_about(
            "mailmark turns lightly marked-up text into inline-styled, table-based HTML\n\
            for email notifications.\n\n\
            Dialect:\n  \
            **bold**, *italic*          emphasis\n  \
            ---                         horizontal rule (own line)\n  \
            [METRIC_ATTACH_CARD]        insert the metric card (own line)\n  \
            [CODE] ... [/CODE]          code block inside the card description\n  \
            a | b | c                   list inside the card description\n\n\
            Examples:\n  \
            mailmark render body.txt -t 'Open rate' --description-file desc.txt\n  \
            mailmark card -t 'Open rate' -d 'Up **4%**' --document -o card.html\n  \
            mailmark inspect desc.txt card-summary --description-file desc.txt",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available inspection views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mailmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .args(metric_args())
        .subcommand(
            Command::new("render")
                .about("Render body text, expanding metric card placeholders")
                .arg(
                    Arg::new("body")
                        .help("Body text file ('-' or omitted for stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .args(output_args()),
        )
        .subcommand(
            Command::new("card")
                .about("Render only the metric card")
                .args(output_args()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed model instead of HTML")
                .long_about(
                    "Show what the parser made of the input.\n\n\
                    Views:\n  \
                    - blocks-json:  body blocks as JSON (default)\n  \
                    - card-json:    parsed metric card as JSON\n  \
                    - card-summary: parsed metric card as an outline\n\n\
                    Card views ignore the body but still take it positionally.",
                )
                .arg(
                    Arg::new("body")
                        .help("Body text file ('-' for stdin)")
                        .required_unless_present("list-views")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to print. Defaults to 'blocks-json'")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            views::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(&cleaned_args)
        .unwrap_or_else(|e| e.exit());

    if matches.get_flag("list-views") {
        handle_list_views_command();
        return;
    }

    if let Err(err) = run(&matches, &mut extra_params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, extra_params: &mut HashMap<String, String>) -> Result<(), CliError> {
    let mut config = load_cli_config(matches.get_one::<String>("config").map(String::as_str))?;
    apply_config_overrides(&mut config, extra_params)?;
    init_tracing(&config.logging.level);

    for key in extra_params.keys() {
        warn!(key = %key, "ignoring unknown --extra parameter");
    }

    match matches.subcommand() {
        Some(("render", sub)) => handle_render_command(sub, &config),
        Some(("card", sub)) => handle_card_command(sub, &config),
        Some(("inspect", sub)) => handle_inspect_command(sub, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(sub: &ArgMatches, config: &MailmarkConfig) -> Result<(), CliError> {
    let body_path = sub.get_one::<String>("body").map_or("-", String::as_str);
    let body = read_input(body_path)?;
    let card = metric_input(sub, config)?;

    let renderer = Renderer::new(config.fallbacks());
    let html = renderer.render_body(&body, &card.title, &card.description);
    debug!(bytes = html.len(), "rendered body");

    write_output(sub, config, html)
}

/// Handle the card command
fn handle_card_command(sub: &ArgMatches, config: &MailmarkConfig) -> Result<(), CliError> {
    let card = metric_input(sub, config)?;

    let renderer = Renderer::new(config.fallbacks());
    let html = renderer.render_metric_card(&card.title, &card.description);
    debug!(bytes = html.len(), "rendered metric card");

    write_output(sub, config, html)
}

/// Handle the inspect command
fn handle_inspect_command(sub: &ArgMatches, config: &MailmarkConfig) -> Result<(), CliError> {
    let view = sub
        .get_one::<String>("view")
        .map_or(views::DEFAULT_VIEW, String::as_str);
    let body = match sub.get_one::<String>("body") {
        Some(path) if views::view_needs_body(view) => read_input(path)?,
        _ => String::new(),
    };
    let card = metric_input(sub, config)?;

    let renderer = Renderer::new(config.fallbacks());
    let output = views::execute_view(&body, &card, &renderer, view)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the list-views command
fn handle_list_views_command() {
    println!("Available views:\n");
    for view in views::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MailmarkConfig, CliError> {
    let loader = Loader::new().with_optional_file("mailmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    Ok(loader.build()?)
}

fn apply_config_overrides(
    config: &mut MailmarkConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), CliError> {
    if let Some(raw) = extra_params.remove("fallback-title") {
        config.card.fallback_title = raw;
    }
    if let Some(raw) = extra_params.remove("fallback-description") {
        config.card.fallback_description = raw;
    }
    if let Some(raw) = extra_params.remove("output") {
        config.render.output = parse_output_mode(&raw)?;
    }
    if let Some(raw) = extra_params.remove("subject") {
        config.render.subject = raw;
    }
    if let Some(raw) = extra_params.remove("log-level") {
        config.logging.level = raw;
    }
    Ok(())
}

fn parse_output_mode(raw: &str) -> Result<OutputMode, CliError> {
    match raw.to_lowercase().as_str() {
        "fragment" => Ok(OutputMode::Fragment),
        "document" => Ok(OutputMode::Document),
        _ => Err(CliError::InvalidExtra {
            flag: "output".to_string(),
            value: raw.to_string(),
        }),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Metric inputs: explicit flag or file first, then the config presets.
///
/// Empty values are passed through so the renderer's fallbacks apply.
fn metric_input(matches: &ArgMatches, config: &MailmarkConfig) -> Result<MetricCardInput, CliError> {
    let title = match text_arg(matches, "title", "title-file")? {
        Some(title) => title.trim_end_matches(['\n', '\r']).to_string(),
        None => config.card.content.title.clone(),
    };
    let description = text_arg(matches, "description", "description-file")?
        .unwrap_or_else(|| config.card.content.description.clone());
    Ok(MetricCardInput::new(title, description))
}

fn text_arg(matches: &ArgMatches, inline: &str, file: &str) -> Result<Option<String>, CliError> {
    if let Some(value) = matches.get_one::<String>(inline) {
        return Ok(Some(value.clone()));
    }
    matches
        .get_one::<String>(file)
        .map(|path| read_input(path))
        .transpose()
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

fn write_output(sub: &ArgMatches, config: &MailmarkConfig, html: String) -> Result<(), CliError> {
    let html = if sub.get_flag("document") || config.render.output == OutputMode::Document {
        templates::document(&config.render.subject, &html)
    } else {
        html
    };

    match sub.get_one::<String>("output") {
        Some(path) => fs::write(path, html).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            print!("{html}");
            Ok(())
        }
    }
}
