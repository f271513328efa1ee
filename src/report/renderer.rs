//! HTML report rendering
//!
//! Pure transformation from validated data values into self-contained HTML
//! documents. Page layout lives in minijinja templates; the recursive
//! sub-agent tree is rendered in Rust into a single growable buffer.
//!
//! Escaping discipline: engine auto-escaping is disabled and every
//! untrusted field is entity-escaped through [`escape_html`] before it
//! enters the template context, so element content and attribute values
//! share one escape set (`&`, `<`, `>`, `"`, `'`).
//!
//! Compiled templates are cached per renderer instance, lazily, on first
//! successful load. A load failure is not cached: the next render retries.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{DevtrailError, Result};
use crate::publish::PublishReport;
use crate::report::escape::escape_html;
use crate::session::{validate, Session, SubAgent};

/// Template name for session reports
pub const SESSION_TEMPLATE_NAME: &str = "session-report.html";

/// Template name for publish reports
pub const PUBLISH_TEMPLATE_NAME: &str = "publish-report.html";

const EMBEDDED_SESSION_TEMPLATE: &str = include_str!("templates/session-report.html");
const EMBEDDED_PUBLISH_TEMPLATE: &str = include_str!("templates/publish-report.html");

/// Where template sources come from
#[derive(Debug, Clone)]
enum TemplateSource {
    /// Templates compiled into the binary
    Embedded,
    /// Templates loaded from a directory, by the names above
    Dir(PathBuf),
}

/// One code change row, fields already escaped
#[derive(Serialize)]
struct ChangeContext {
    file: String,
    additions: u32,
    deletions: u32,
    diff: Option<String>,
}

/// One pass/fail section of a publish report, fields already escaped
#[derive(Serialize)]
struct CheckSection {
    name: &'static str,
    passed: bool,
    report: Option<String>,
}

/// Renders sessions and publish reports to HTML strings
///
/// Owns its template cache explicitly, so tests can construct a fresh
/// renderer per case instead of sharing ambient module state. Never touches
/// the filesystem on the embedded path; the directory override loads each
/// template file once and caches the compiled environment.
pub struct ReportRenderer {
    source: TemplateSource,
    env: Mutex<Option<Arc<Environment<'static>>>>,
}

impl ReportRenderer {
    /// Create a renderer backed by the embedded templates
    pub fn new() -> Self {
        Self {
            source: TemplateSource::Embedded,
            env: Mutex::new(None),
        }
    }

    /// Create a renderer that loads templates from a directory
    ///
    /// The directory must contain `session-report.html` and
    /// `publish-report.html`. Loading happens lazily on first render.
    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::Dir(dir.into()),
            env: Mutex::new(None),
        }
    }

    /// Render a session into a complete HTML document
    ///
    /// # Errors
    ///
    /// Returns a validation error for a structurally invalid session (which
    /// is never rendered), or a template error when the backing template
    /// cannot be loaded or rendered.
    pub fn render_session(&self, session: &Session) -> Result<String> {
        if !validate(session) {
            return Err(DevtrailError::Validation(
                "session failed structural validation and will not be rendered".to_string(),
            )
            .into());
        }

        let env = self.environment()?;
        let template = env
            .get_template(SESSION_TEMPLATE_NAME)
            .map_err(|e| DevtrailError::Template(format!("session report template: {}", e)))?;

        let mut tree = String::new();
        render_sub_agents(&session.sub_agents, &mut tree);

        let files: Vec<String> = session
            .files_modified
            .iter()
            .map(|f| escape_html(f))
            .collect();
        let changes: Vec<ChangeContext> = session
            .code_changes
            .iter()
            .map(|c| ChangeContext {
                file: escape_html(&c.file),
                additions: c.additions,
                deletions: c.deletions,
                diff: c.diff.as_deref().map(escape_html),
            })
            .collect();

        let html = template
            .render(context! {
                id => escape_html(&session.id),
                timestamp => escape_html(&session.timestamp),
                user => escape_html(&session.user),
                branch => escape_html(&session.branch),
                main_prompt => escape_html(&session.main_prompt),
                files_modified => files,
                code_changes => changes,
                incomplete => session.incomplete.unwrap_or(false),
                sub_agents_html => tree,
            })
            .map_err(|e| {
                DevtrailError::Template(format!("failed to render session report: {}", e))
            })?;

        Ok(html)
    }

    /// Render a publish report into a complete HTML document
    ///
    /// # Errors
    ///
    /// Returns a template error when the backing template cannot be loaded
    /// or rendered.
    pub fn render_publish(&self, report: &PublishReport) -> Result<String> {
        let env = self.environment()?;
        let template = env
            .get_template(PUBLISH_TEMPLATE_NAME)
            .map_err(|e| DevtrailError::Template(format!("publish report template: {}", e)))?;

        let sections = [
            CheckSection {
                name: "Tests",
                passed: report.tests_passed,
                report: None,
            },
            CheckSection {
                name: "Code Review",
                passed: report.code_review_passed,
                report: report.code_review_report.as_deref().map(escape_html),
            },
            CheckSection {
                name: "Security Audit",
                passed: report.security_audit_passed,
                report: report.security_report.as_deref().map(escape_html),
            },
            CheckSection {
                name: "Visual QA",
                passed: report.visual_qa_passed,
                report: report.visual_qa_report.as_deref().map(escape_html),
            },
        ];

        let html = template
            .render(context! {
                branch => escape_html(&report.branch),
                timestamp => escape_html(&report.timestamp),
                pr_url => report.pr_url.as_deref().map(escape_html),
                tests_output => escape_html(&report.tests_output),
                sections => sections,
            })
            .map_err(|e| {
                DevtrailError::Template(format!("failed to render publish report: {}", e))
            })?;

        Ok(html)
    }

    /// Return the compiled template environment, loading it on first use
    fn environment(&self) -> Result<Arc<Environment<'static>>> {
        let mut cache = self
            .env
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(env) = cache.as_ref() {
            return Ok(Arc::clone(env));
        }

        let (session_src, publish_src) = self.load_sources()?;

        let mut env = Environment::new();
        // Context values arrive pre-escaped; see the module docs
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(SESSION_TEMPLATE_NAME, session_src)
            .map_err(|e| {
                DevtrailError::Template(format!("failed to compile session report template: {}", e))
            })?;
        env.add_template_owned(PUBLISH_TEMPLATE_NAME, publish_src)
            .map_err(|e| {
                DevtrailError::Template(format!("failed to compile publish report template: {}", e))
            })?;

        let env = Arc::new(env);
        *cache = Some(Arc::clone(&env));
        Ok(env)
    }

    /// Load raw template sources from the configured origin
    fn load_sources(&self) -> Result<(String, String)> {
        match &self.source {
            TemplateSource::Embedded => Ok((
                EMBEDDED_SESSION_TEMPLATE.to_string(),
                EMBEDDED_PUBLISH_TEMPLATE.to_string(),
            )),
            TemplateSource::Dir(dir) => {
                let load = |name: &str| -> Result<String> {
                    let path = dir.join(name);
                    std::fs::read_to_string(&path).map_err(|e| {
                        anyhow::Error::from(DevtrailError::Template(format!(
                            "failed to load template {}: {}",
                            path.display(),
                            e
                        )))
                    })
                };
                Ok((load(SESSION_TEMPLATE_NAME)?, load(PUBLISH_TEMPLATE_NAME)?))
            }
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a sub-agent forest into nested disclosure elements
///
/// Single recursive walk visiting each node exactly once, appending into one
/// growable buffer; stack usage is proportional to nesting depth. All
/// free-text fields are entity-escaped, including the copy payload carried
/// in a double-quoted attribute.
fn render_sub_agents(agents: &[SubAgent], out: &mut String) {
    for agent in agents {
        out.push_str("<details class=\"sub-agent");
        if !agent.sub_agents.is_empty() {
            out.push_str(" sub-agent-nested");
        }
        out.push_str("\" open>\n<summary><strong>");
        out.push_str(&escape_html(&agent.kind.to_string()));
        out.push_str(":</strong> ");
        out.push_str(&escape_html(&agent.task));
        out.push_str("</summary>\n<p>");
        out.push_str(&escape_html(&agent.results));
        out.push_str("</p>\n<button class=\"copy-btn\" data-copy-text=\"");
        out.push_str(&escape_html(&agent.task));
        out.push_str("&#10;");
        out.push_str(&escape_html(&agent.results));
        out.push_str("\">Copy</button>\n");
        render_sub_agents(&agent.sub_agents, out);
        out.push_str("</details>\n");
    }
}
