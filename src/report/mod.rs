//! Report rendering pipeline
//!
//! Everything between a validated data value and a durable HTML artifact:
//! filename derivation, HTML-safe rendering, and persistence under the
//! project's `docs/` tree.

pub mod escape;
pub mod filename;
pub mod renderer;
pub mod writer;

pub use escape::escape_html;
pub use filename::{format_stamp, report_filename, sanitize_label};
pub use renderer::ReportRenderer;
pub use writer::{ReportWriter, PUBLISH_REPORT_DIR, SESSION_REPORT_DIR};
