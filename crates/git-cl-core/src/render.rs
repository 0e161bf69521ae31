//! Body and document rendering.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::aggregate::GroupedCommits;
use crate::error::{CoreError, CoreResult, TemplateKind};

const BODY_NAME: &str = "body";
const DOCUMENT_NAME: &str = "document";

/// Template wrapping the rendered body between header and footer.
pub const DOCUMENT_TEMPLATE: &str = "{{ header }}\n\n{{ body }}{{ footer }}";

/// Creates the environment shared by both renderers.
///
/// Undefined values are errors, and template text is emitted verbatim, trailing
/// newline included.
fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
}

fn compile<'source>(
    kind: TemplateKind,
    name: &'static str,
    source: &'source str,
) -> CoreResult<Environment<'source>> {
    let mut env = environment();
    env.add_template(name, source)
        .map_err(|source| CoreError::TemplateCompile {
            template: kind,
            source,
        })?;
    Ok(env)
}

fn render_error(kind: TemplateKind) -> impl FnOnce(minijinja::Error) -> CoreError {
    move |source| CoreError::TemplateRender {
        template: kind,
        source,
    }
}

/// Renders grouped commits through the user-configurable body template.
///
/// The template sees `groups`, a list of `{label, commits}` in first-seen order where
/// each commit has `type`, `scope` and `subject`, and `version` (none when unset).
#[derive(Debug)]
pub struct BodyRenderer<'source> {
    env: Environment<'source>,
}

impl<'source> BodyRenderer<'source> {
    /// Compiles the body template.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TemplateCompile`] if the template has invalid syntax.
    pub fn compile(template: &'source str) -> CoreResult<Self> {
        let env = compile(TemplateKind::Body, BODY_NAME, template)?;
        Ok(Self { env })
    }

    /// Renders the body.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TemplateRender`] if rendering fails, e.g. when the
    /// template references a field that does not exist.
    pub fn render(&self, groups: &GroupedCommits, version: Option<&str>) -> CoreResult<String> {
        let kind = TemplateKind::Body;
        let template = self.env.get_template(BODY_NAME).map_err(render_error(kind))?;
        template
            .render(context! { groups => groups, version => version })
            .map_err(render_error(kind))
    }
}

/// Renders the final document from header, body and footer.
#[derive(Debug)]
pub struct DocumentRenderer {
    env: Environment<'static>,
}

impl DocumentRenderer {
    /// Compiles the document template.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TemplateCompile`] if the template has invalid syntax.
    pub fn new() -> CoreResult<Self> {
        let env = compile(TemplateKind::Document, DOCUMENT_NAME, DOCUMENT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TemplateRender`] if rendering fails.
    pub fn render(
        &self,
        header: &str,
        body: &str,
        footer: &str,
        version: Option<&str>,
    ) -> CoreResult<String> {
        let kind = TemplateKind::Document;
        let template = self
            .env
            .get_template(DOCUMENT_NAME)
            .map_err(render_error(kind))?;
        template
            .render(context! {
                header => header,
                body => body,
                footer => footer,
                version => version,
            })
            .map_err(render_error(kind))
    }
}
