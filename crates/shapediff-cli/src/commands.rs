use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use shapediff_diff::{CompareConfig, Comparator, Comparison};
use shapediff_types::Value;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Compare(args) => {
            let outcome = cmd_compare(&args, cli.format, &mut io::stdout().lock())?;
            Ok(outcome.exit_code())
        }
        Command::Config(args) => cmd_config(args),
    }
}

/// Result of a successful `compare` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Equal,
    Different,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Equal => ExitCode::SUCCESS,
            Outcome::Different => ExitCode::from(1),
        }
    }
}

pub(crate) fn cmd_compare(
    args: &CompareArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let config = load_config(&args.settings)?;
    let left = load_value(&args.left)?;
    let right = load_value(&args.right)?;

    tracing::debug!(?config, left = %args.left.display(), right = %args.right.display(), "comparing");
    let tree = Comparator::new(config).compare(&left, &right);

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&tree)?)?,
        OutputFormat::Text => print_summary(&tree, out)?,
    }

    Ok(if tree.is_empty() {
        Outcome::Equal
    } else {
        Outcome::Different
    })
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<ExitCode> {
    let config = load_config(&args.settings)?;
    print!("{}", config.to_toml_string()?);
    if config.max_depth.is_none() {
        println!("# max_depth unset: nesting depth is unbounded");
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(tree: &Comparison, out: &mut impl Write) -> io::Result<()> {
    if tree.is_empty() {
        return writeln!(out, "{} Values are structurally equal", "✓".green().bold());
    }

    let leaves = tree.leaves();
    let noun = if leaves.len() == 1 { "difference" } else { "differences" };
    writeln!(out, "{} {} {}", "✗".red().bold(), leaves.len().to_string().bold(), noun)?;
    for (path, node) in leaves {
        writeln!(out, "  {}  {}", path.to_string().cyan(), node.kind.to_string().yellow())?;
    }
    Ok(())
}

/// Resolve the configuration: defaults, then the TOML file, then flags.
pub(crate) fn load_config(settings: &ConfigOverrides) -> anyhow::Result<CompareConfig> {
    let mut config = match &settings.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            CompareConfig::from_toml_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => CompareConfig::default(),
    };

    if let Some(depth) = settings.max_depth {
        config = config.with_max_depth(depth);
    }
    if settings.no_max_depth {
        config = config.unbounded();
    }
    if settings.report_unsupported {
        config = config.report_unsupported();
    }
    Ok(config)
}

pub(crate) fn load_value(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Value::from_json_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
