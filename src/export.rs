//! Saving a finished reading: plain text log or a standalone HTML page.

use crate::cards::images::{ImageCache, PLACEHOLDER};
use crate::cards::Spread;
use crate::engine::Result;
use crate::narrative::Interpretation;
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "oracle_log.txt";
pub const DEFAULT_HTML_FILE: &str = "oracle_reading.html";

const STYLE: &str = "\
body { background: #000; color: #39ff14; font-family: monospace; max-width: 960px; margin: 2em auto; }
.spread { display: flex; gap: 1.5em; justify-content: center; }
.slot { flex: 1; text-align: center; }
.position { border-bottom: 2px solid #39ff14; font-weight: bold; }
.slot img { max-width: 100%; border: 1px solid #39ff14; }
.missing { border: 1px solid #ff003c; padding: 3em 0; color: #ff003c; }
.archetype { color: #ffffff; font-size: 0.8em; }
h3 { color: #ffffff; }
.degraded { color: #ff003c; }";

/// Writes the reading text exactly as generated.
pub fn save_log(path: &Path, interpretation: &Interpretation) -> Result<()> {
    fs::write(path, &interpretation.text)?;
    tracing::info!(path = %path.display(), "saved reading log");
    Ok(())
}

pub fn render_html(spread: &Spread, interpretation: &Interpretation, images: &ImageCache) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>ORACLE // DECRYPTED</title>\n");
    html.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<div class=\"spread\">\n");

    for (position, card) in spread.slots() {
        html.push_str("<div class=\"slot\">\n");
        html.push_str(&format!("<div class=\"position\">{}</div>\n", escape(position.name)));
        html.push_str(&format!("<div class=\"desc\">// {}</div>\n", escape(position.desc)));
        match images.get(card.name) {
            Some(image) => {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" title=\"{} // {}\">\n",
                    image.data_uri(),
                    escape(card.name),
                    escape(card.name),
                    escape(card.archetype)
                ));
            }
            None => {
                html.push_str(&format!("<div class=\"missing\">{}</div>\n", PLACEHOLDER));
            }
        }
        html.push_str(&format!("<h2>{}</h2>\n", escape(card.name)));
        html.push_str(&format!("<div class=\"archetype\">{}</div>\n", escape(card.archetype)));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n<div class=\"reading\">\n");

    for line in interpretation.text.lines() {
        let line = line.trim_end();
        if let Some(header) = line.strip_prefix("### ") {
            html.push_str(&format!("<h3>{}</h3>\n", escape(header)));
        } else if line.starts_with("CONNECTION_SEVERED") {
            html.push_str(&format!("<p class=\"degraded\">{}</p>\n", escape(line)));
        } else if !line.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", escape(line)));
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

pub fn save_html(
    path: &Path,
    spread: &Spread,
    interpretation: &Interpretation,
    images: &ImageCache,
) -> Result<()> {
    fs::write(path, render_html(spread, interpretation, images))?;
    tracing::info!(path = %path.display(), embedded = images.len(), "saved reading page");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
