//! Changelog generator.

use std::io::Read;

use git_cl_commit::Commit;
use git_cl_config::Config;
use tracing::{debug, info};

use crate::aggregate::{GroupedCommits, group_commits};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::CoreResult;
use crate::groups::GroupTable;
use crate::parser::{CommitParser, SubjectParser};
use crate::reader::{read_lines, trim_line_terminator};
use crate::render::{BodyRenderer, DocumentRenderer};

/// A configuration change applied while constructing a [`ChangelogGenerator`].
///
/// Options are applied in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorOption {
    /// Sets the version made available to templates as `version`.
    Version(String),

    /// Replaces header, footer, body template and group mapping.
    Configuration(Config),

    /// Changes the group of one recognized commit type.
    OverrideGroup {
        /// The commit type, e.g. `doc`.
        commit_type: String,
        /// The new group label.
        group: String,
    },

    /// Replaces the header.
    Header(String),

    /// Replaces the footer.
    Footer(String),

    /// Replaces the body template.
    BodyTemplate(String),
}

/// Creates a changelog from a list of commit subject lines.
pub struct ChangelogGenerator {
    lines: Vec<String>,
    groups: GroupTable,
    header: String,
    footer: String,
    body_template: String,
    version: Option<String>,
    parser: Box<dyn CommitParser>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl ChangelogGenerator {
    /// Applies `options` to the default configuration and reads all lines from `reader`.
    ///
    /// `None` entries in `options` are skipped, so optional settings can be passed
    /// without filtering them first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::SourceRead`] if reading fails before end of stream.
    pub fn new<R, I, O>(reader: R, options: I) -> CoreResult<Self>
    where
        R: Read,
        I: IntoIterator<Item = O>,
        O: Into<Option<GeneratorOption>>,
    {
        let defaults = Config::default();
        let mut generator = Self {
            lines: Vec::new(),
            groups: GroupTable::default(),
            header: defaults.header,
            footer: defaults.footer,
            body_template: defaults.body_template,
            version: None,
            parser: Box::new(SubjectParser::new()),
            diagnostics: Box::new(TracingSink),
        };

        for option in options
            .into_iter()
            .filter_map(Into::<Option<GeneratorOption>>::into)
        {
            generator.apply(option);
        }

        generator.lines = read_lines(reader)?;
        Ok(generator)
    }

    fn apply(&mut self, option: GeneratorOption) {
        match option {
            GeneratorOption::Version(version) => self.version = Some(version),
            GeneratorOption::Configuration(config) => {
                debug!("applying configuration");
                self.header = config.header;
                self.footer = config.footer;
                self.body_template = config.body_template;
                self.groups = GroupTable::from_mapping(&config.groups);
            }
            GeneratorOption::OverrideGroup { commit_type, group } => {
                self.override_group_for_type(&commit_type, group);
            }
            GeneratorOption::Header(header) => self.header = header,
            GeneratorOption::Footer(footer) => self.footer = footer,
            GeneratorOption::BodyTemplate(template) => self.body_template = template,
        }
    }

    /// Replaces the parser used to turn lines into commits.
    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn CommitParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the sink receiving skipped-line and unclassified-commit diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Changes the group for a commit type.
    ///
    /// Unknown types are ignored.
    pub fn override_group_for_type(&mut self, commit_type: &str, group: impl Into<String>) {
        if !self.groups.override_group(commit_type, group) {
            debug!(%commit_type, "no group to override");
        }
    }

    /// Returns the configured version.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the group table.
    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Returns the active configuration.
    pub fn config(&self) -> Config {
        Config {
            header: self.header.clone(),
            footer: self.footer.clone(),
            body_template: self.body_template.clone(),
            groups: self.groups.as_map().clone(),
        }
    }

    /// Parses all lines, skipping those without a commit prefix.
    pub fn parse_commits(&self) -> Vec<Commit> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let parsed = self.parser.parse(line);
                if parsed.is_none() {
                    self.diagnostics.report(Diagnostic::SkippedLine {
                        line_number: index + 1,
                        line: trim_line_terminator(line).to_string(),
                    });
                }
                parsed
            })
            .collect()
    }

    /// Parses all lines and files the commits under their groups.
    pub fn group_commits(&self) -> GroupedCommits {
        group_commits(self.parse_commits(), &self.groups, self.diagnostics.as_ref())
    }

    /// Builds the changelog document.
    ///
    /// Both templates are compiled before any commit is processed. Calling this
    /// again without changing the configuration produces the same output.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::TemplateCompile`] or
    /// [`crate::CoreError::TemplateRender`] if either template fails.
    pub fn build(&self) -> CoreResult<String> {
        let body_renderer = BodyRenderer::compile(&self.body_template)?;
        let document_renderer = DocumentRenderer::new()?;

        let grouped = self.group_commits();
        info!(
            lines = self.lines.len(),
            commits = grouped.commit_count(),
            groups = grouped.len(),
            "grouped commits"
        );

        let version = self.version();
        let body = body_renderer.render(&grouped, version)?;
        document_renderer.render(&self.header, &body, &self.footer, version)
    }
}

impl std::fmt::Debug for ChangelogGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangelogGenerator")
            .field("lines", &self.lines.len())
            .field("groups", &self.groups)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
