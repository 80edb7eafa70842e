use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/views.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["blocks-json", "card-json", "card-summary"];

fn output_args() -> [Arg; 2] {
    [
        Arg::new("output")
            .long("output")
            .short('o')
            .value_hint(ValueHint::FilePath),
        Arg::new("document")
            .long("document")
            .action(ArgAction::SetTrue),
    ]
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mailmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render mailmark text into email-safe HTML")
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
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(Arg::new("title").long("title").short('t').global(true))
        .arg(
            Arg::new("title-file")
                .long("title-file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .short('d')
                .global(true),
        )
        .arg(
            Arg::new("description-file")
                .long("description-file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .arg(
                    Arg::new("body")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .args(output_args()),
        )
        .subcommand(Command::new("card").args(output_args()))
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("body")
                        .required_unless_present("list-views")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                        .index(2),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mailmark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mailmark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mailmark", &outdir)?;

    Ok(())
}
