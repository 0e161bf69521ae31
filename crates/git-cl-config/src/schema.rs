//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Default text placed before the changelog body.
pub const DEFAULT_HEADER: &str = "# Changelog";

/// Default text placed after the changelog body.
pub const DEFAULT_FOOTER: &str = "generated by git-cl";

/// Default body template: a level-2 heading per group and one bullet per commit.
pub const DEFAULT_BODY_TEMPLATE: &str = "{% for group in groups %}## {{ group.label }}\
{% for commit in group.commits %}
- {{ commit.subject }}{% if commit.scope %} ({{ commit.scope }}){% endif %}{% endfor %}

{% endfor %}";

/// Returns the default commit type to group label mapping.
///
/// The keys are the complete set of commit types git-cl recognizes.
#[must_use]
pub fn default_groups() -> BTreeMap<String, String> {
    [
        ("feat", "Feature"),
        ("fix", "Bugfix"),
        ("doc", "Other"),
        ("chore", "Other"),
        ("refactor", "Optimization"),
        ("test", "Optimization"),
        ("style", "Usability"),
        ("perf", "Optimization"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(t, g)| (t.to_string(), g.to_string()))
    .collect()
}

/// Generator configuration.
///
/// Field names also accept the capitalized spelling (`Header`, `BodyTemplate`, ...)
/// used by older configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Text added to the beginning of the changelog.
    #[serde(default = "default_header", alias = "Header")]
    pub header: String,

    /// Text added to the end of the changelog.
    #[serde(default = "default_footer", alias = "Footer")]
    pub footer: String,

    /// Template rendering the grouped commits.
    #[serde(default = "default_body_template", alias = "BodyTemplate")]
    pub body_template: String,

    /// Commit type to group label mapping.
    #[serde(default = "default_groups", alias = "Groups")]
    pub groups: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: default_header(),
            footer: default_footer(),
            body_template: default_body_template(),
            groups: default_groups(),
        }
    }
}

impl Config {
    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::InvalidJson)
    }
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

fn default_body_template() -> String {
    DEFAULT_BODY_TEMPLATE.to_string()
}
