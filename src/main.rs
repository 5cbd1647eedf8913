use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction};
use tracing_subscriber::EnvFilter;
use uritemplate::{config, Template, UriParameters};

fn cli() -> clap::Command {
    clap::Command::new("uritemplate")
        .about("Expand an RFC 6570-style URI template")
        .arg(
            Arg::new("template")
                .value_name("TEMPLATE")
                .help("Template to expand, e.g. '/api{/id}{?q}'")
                .required(true),
        )
        .arg(
            Arg::new("params")
                .short('p')
                .long("params")
                .value_name("FILE")
                .help("Path to a YAML or JSON file containing parameters"),
        )
        .arg(
            Arg::new("set")
                .short('s')
                .long("set")
                .value_name("NAME=VALUE")
                .help("Bind a string parameter, overriding the parameter file")
                .action(ArgAction::Append),
        )
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((name, value)) => Ok((name, value)),
        None => bail!("Invalid --set argument '{}': expected NAME=VALUE", assignment),
    }
}

// RUST_LOG when set, otherwise warnings only
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let matches = cli().get_matches();

    let source = matches
        .get_one::<String>("template")
        .context("Missing template argument")?;
    let template = Template::parse(source)
        .with_context(|| format!("Could not parse template '{}'", source))?;

    let mut params = match matches.get_one::<String>("params") {
        Some(path) => config::load_parameters(path)
            .with_context(|| format!("Could not load parameters from {}", path))?,
        None => UriParameters::new(),
    };

    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        let (name, value) = parse_assignment(assignment)?;
        params.insert(name, value);
    }

    for var in template.variables() {
        if !params.contains(&var.name) {
            tracing::info!(name = %var.name, "template variable has no value");
        }
    }

    println!("{}", template.expand(&params));
    Ok(())
}
