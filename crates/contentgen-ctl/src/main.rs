//! contentgen-ctl
//!
//! Generates Android content provider, REST and view boilerplate from a
//! directory of JSON entity definitions.

mod commands;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "contentgen-ctl",
    version,
    about = "Generate Android content provider boilerplate from JSON entity definitions",
    styles = output::clap_styles()
)]
pub(crate) struct Cli {
    /// Directory holding `_config.json`, the entity files and an optional `header.txt`
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Root directory for the generated source tree
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Directory of `*.tera` files overriding the built-in templates
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Log every entity, field and written file
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::handle_generate_command(&cli) {
        output::error(e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = match format!("contentgen={level}").parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
