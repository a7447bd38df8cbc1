//! Card grid rendering

use crate::agent::Agent;

use super::escape::{escape_html, escape_text};

const VERSION_UNKNOWN: &str = "version unknown";

/// One agent ready for rendering
#[derive(Debug, Clone)]
pub struct Card {
    pub agent: Agent,
    /// Sanitized SVG markup, if the agent ships an icon
    pub icon: Option<String>,
}

/// Render the two-column card grid for `cards`, in the given order
pub fn render_cards(cards: &[Card]) -> String {
    let mut lines = vec!["<Columns cols={2}>".to_string()];

    for card in cards {
        push_card(&mut lines, card);
    }

    lines.push("</Columns>".to_string());
    lines.join("\n")
}

fn push_card(lines: &mut Vec<String>, card: &Card) {
    let agent = &card.agent;

    lines.push("  <Card".to_string());
    lines.push(format!("    title=\"{}\"", escape_html(agent.display_name())));

    if let Some(icon) = card.icon.as_deref().filter(|icon| !icon.is_empty()) {
        lines.push("    icon={".to_string());
        lines.extend(icon.lines().map(|line| format!("      {}", line)));
        lines.push("    }".to_string());
    }

    if let Some(repository) = agent.repository() {
        lines.push(format!("    href=\"{}\"", escape_html(repository)));
        lines.push("    arrow=\"true\"".to_string());
    }

    lines.push("  >".to_string());
    lines.push(format!("    {}", escape_text(agent.description())));

    let version = agent
        .known_version()
        .map(escape_text)
        .unwrap_or_else(|| VERSION_UNKNOWN.to_string());
    lines.push(format!("    <p><code>{}</code></p>", version));
    lines.push("  </Card>".to_string());
}
