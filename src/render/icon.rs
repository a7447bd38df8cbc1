//! SVG icon sanitization
//!
//! Icons are authored as plain SVG but embedded as JSX inside a card's
//! `icon={...}` prop, so sizing and class attributes are stripped, the root
//! element gets a fixed size with accessibility attributes, and hyphenated
//! presentation attributes are renamed to their camelCase JSX forms.

use eyre::{Context, Result};
use lazy_regex::regex;
use std::fs;

use crate::agent::Agent;

/// Attributes injected on the root `<svg>` element; must not contain `$`
const ROOT_ATTRIBUTES: &str = r#"<svg width="20" height="20" className="agent-icon" aria-hidden="true" focusable="false""#;

/// Hyphenated SVG attributes and their JSX names
///
/// Matched literally as `name=` so hyphenated attribute values are never touched.
const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("fill-rule", "fillRule"),
    ("clip-rule", "clipRule"),
    ("clip-path", "clipPath"),
    ("stroke-width", "strokeWidth"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-opacity", "strokeOpacity"),
    ("fill-opacity", "fillOpacity"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("vector-effect", "vectorEffect"),
];

/// Sanitize raw SVG markup for embedding in a card
pub fn sanitize_svg(svg: &str) -> String {
    let svg = svg.trim();
    let svg = regex!(r#"\s(width|height)="[^"]*""#).replace_all(svg, "");
    let svg = regex!(r#"\sclass="[^"]*""#).replace_all(&svg, "");
    // First match only
    let svg = regex!(r"<svg\b").replace(&svg, ROOT_ATTRIBUTES).into_owned();

    ATTRIBUTE_RENAMES.iter().fold(svg, |svg, &(from, to)| {
        svg.replace(&format!("{}=", from), &format!("{}=", to))
    })
}

/// Load and sanitize the agent's icon
///
/// `None` when the icon file is missing or holds only whitespace; an empty
/// `icon={}` expression does not compile as MDX.
pub fn load_icon(agent: &Agent, icon_file: &str) -> Result<Option<String>> {
    let path = agent.icon_path(icon_file);
    if !path.is_file() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read icon: {}", path.display()))?;
    log::debug!("Sanitizing icon {}", path.display());

    let icon = sanitize_svg(&raw);
    if icon.is_empty() {
        log::debug!("Ignoring blank icon {}", path.display());
        return Ok(None);
    }

    Ok(Some(icon))
}
