//! Page reference extraction
//!
//! Collects the asset references of a page in one streaming pass: the
//! `href` of every `<link rel=stylesheet>` and the `src` of every
//! `<script src>`, in document order. Elements without the attribute are
//! skipped here (the transformer still removes attribute-less stylesheet
//! links later).

use lol_html::{RewriteStrSettings, element, rewrite_str};

use super::PageError;

/// The raw asset references of a single page
#[derive(Debug, Clone, Default)]
pub struct PageRefs {
    /// `href` values of `<link rel=stylesheet>` elements
    pub stylesheets: Vec<String>,
    /// `src` values of `<script>` elements
    pub scripts: Vec<String>,
}

/// Collect every stylesheet and script reference from a page
pub fn collect_refs(html: &str) -> Result<PageRefs, PageError> {
    let mut stylesheets = Vec::new();
    let mut scripts = Vec::new();

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("link[rel=stylesheet]", |el| {
                    if let Some(href) = el.get_attribute("href") {
                        stylesheets.push(href);
                    }
                    Ok(())
                }),
                element!("script[src]", |el| {
                    if let Some(src) = el.get_attribute("src") {
                        scripts.push(src);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )?;

    Ok(PageRefs {
        stylesheets,
        scripts,
    })
}
