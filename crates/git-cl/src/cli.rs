//! CLI definition.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git_cl_config::load_config;
use git_cl_core::{ChangelogGenerator, GeneratorOption};
use tracing::debug;

/// Generate a grouped changelog from conventional commit subjects.
///
/// Reads one commit subject per line from stdin, e.g.
/// `git log --format=%s v1.0.0..HEAD | git-cl`.
#[derive(Debug, Parser)]
#[command(name = "git-cl")]
#[command(about, long_about = None)]
pub struct Cli {
    /// Version of the changelog, available to templates as `version`
    #[arg(long, env = "GIT_CL_VERSION")]
    pub version: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long, env = "GIT_CL_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Print the configuration in use instead of building a changelog
    #[arg(long)]
    pub print_config: bool,

    /// Override the group for a commit type (e.g. doc=Documentation)
    #[arg(long = "group", value_name = "TYPE=LABEL", value_parser = parse_group_override)]
    pub groups: Vec<(String, String)>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        if self.print_config {
            return self.print_config();
        }

        let options = self.options()?;
        let stdin = io::stdin();
        let generator = ChangelogGenerator::new(stdin.lock(), options)
            .context("failed to read commit subjects")?;

        let changelog = generator.build().context("failed to build changelog")?;
        if !changelog.is_empty() {
            emit(&changelog)?;
        }
        Ok(())
    }

    /// Prints the active configuration as JSON.
    ///
    /// Version and configuration file are ignored in this mode.
    fn print_config(&self) -> Result<()> {
        let generator = ChangelogGenerator::new(io::empty(), self.group_options())?;
        let json = generator.config().to_json_pretty()?;
        emit(&json)
    }

    fn options(&self) -> Result<Vec<Option<GeneratorOption>>> {
        let version = self
            .version
            .clone()
            .filter(|v| !v.is_empty())
            .map(GeneratorOption::Version);

        let configuration = match &self.config_file {
            Some(path) if !path.as_os_str().is_empty() => {
                debug!(?path, "using configuration file");
                let config = load_config(path).with_context(|| {
                    format!("error reading configuration file {}", path.display())
                })?;
                Some(GeneratorOption::Configuration(config))
            }
            _ => None,
        };

        let mut options = vec![version, configuration];
        options.extend(self.group_options().into_iter().map(Some));
        Ok(options)
    }

    fn group_options(&self) -> Vec<GeneratorOption> {
        self.groups
            .iter()
            .map(|(commit_type, group)| GeneratorOption::OverrideGroup {
                commit_type: commit_type.clone(),
                group: group.clone(),
            })
            .collect()
    }
}

/// Writes `text` and a newline to stdout.
fn emit(text: &str) -> Result<()> {
    write_line(&mut io::stdout().lock(), text).context("failed to write output")
}

/// Writes `text` and a newline, stopping quietly if the reader has gone away.
fn write_line(out: &mut impl Write, text: &str) -> io::Result<()> {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Parses a `TYPE=LABEL` group override.
fn parse_group_override(value: &str) -> Result<(String, String), String> {
    let (commit_type, group) = value
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=LABEL, got `{value}`"))?;

    let commit_type = commit_type.trim();
    if commit_type.is_empty() {
        return Err(format!("missing commit type in `{value}`"));
    }

    Ok((commit_type.to_string(), group.trim().to_string()))
}
