//! Post-render HTML transform.
//!
//! The single hook applied to emitted HTML before it reaches the output
//! tree: production builds get minified markup, development builds keep the
//! readable output for debugging. Non-HTML output paths pass through
//! untouched in every environment.

use crate::config::Environment;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors from the post-render transform.
///
/// Minification failures halt the build; silently emitting broken HTML is
/// worse than stopping.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("minified output for `{path}` is not valid UTF-8")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Transform emitted HTML for one output file.
///
/// Minifies (whitespace collapsed, comments removed, short doctype) only when
/// the output path ends in `.html` and the environment is production;
/// otherwise the input is returned borrowed and unchanged. Idempotent on
/// already-minified input.
pub fn transform_html<'a>(
    html: &'a str,
    output_path: Option<&Path>,
    env: Environment,
) -> Result<Cow<'a, str>, TransformError> {
    let is_html = output_path.is_some_and(|p| p.to_string_lossy().ends_with(".html"));
    if !is_html || !env.is_production() {
        return Ok(Cow::Borrowed(html));
    }

    let minified = minify_html::minify(html.as_bytes(), &minify_cfg());
    // minify-html operates on bytes; reject output that no longer round-trips
    // as UTF-8 rather than writing a mangled file.
    let minified = String::from_utf8(minified).map_err(|source| TransformError::InvalidUtf8 {
        path: output_path.map(Path::to_path_buf).unwrap_or_default(),
        source,
    })?;
    Ok(Cow::Owned(minified))
}

fn minify_cfg() -> minify_html::Cfg {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg
}
