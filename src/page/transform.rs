//! Page transformer - mutates and minifies a validated page
//!
//! The rewrite happens in one streaming pass: every `<script src>` gains
//! `defer`, every stylesheet link that is not a well-formed remote URL is
//! removed, and one link to the stylesheet bundle is appended to `<head>`
//! with a prefix matching the page's depth. The rewritten markup is then
//! minified as a whole, including inline CSS and JS.

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str};
use minify_html::Cfg;

use crate::paths;
use crate::reference;

use super::PageError;

/// Rewrite a page's DOM: defer scripts, strip local stylesheet links,
/// inject the bundle link.
///
/// `prefix` is the relative path from the page's directory to the project
/// root, as computed by [`paths::relative_prefix`]. Pages without a
/// `<head>` get no injection.
pub fn rewrite(html: &str, prefix: &str) -> Result<String, PageError> {
    let bundle_link = format!(
        r#"<link rel="stylesheet" href="{prefix}/{}/{}">"#,
        paths::CSS_DIR,
        paths::STYLE_BUNDLE
    );

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("script[src]", |el| {
                    // Idempotent: an existing defer is simply overwritten
                    el.set_attribute("defer", "")?;
                    Ok(())
                }),
                element!("link[rel=stylesheet]", |el| {
                    let remote = el
                        .get_attribute("href")
                        .is_some_and(|href| reference::is_web_url(&href));
                    if !remote {
                        el.remove();
                    }
                    Ok(())
                }),
                element!("head", move |el| {
                    el.append(&bundle_link, ContentType::Html);
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(PageError::from)
}

/// Minify a page, including inline CSS and JS
pub fn minify(html: &str) -> Result<String, PageError> {
    let cfg = Cfg {
        minify_css: true,
        minify_js: true,
        do_not_minify_doctype: true,
        ..Cfg::default()
    };
    String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).map_err(PageError::from)
}

/// Rewrite and minify a page. Must only be called after validation passed.
pub fn transform(html: &str, prefix: &str) -> Result<String, PageError> {
    let rewritten = rewrite(html, prefix)?;
    minify(&rewritten)
}
