//! Page generation: discover agents, render cards, fill the template

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::agent::discover_agents;
use crate::config::Config;
use crate::render::{Card, load_icon, render_cards};

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of cards rendered
    pub agents: usize,
    pub output: PathBuf,
}

/// Replace the first occurrence of `placeholder` in `template` with `cards`
///
/// A template without the placeholder is returned unchanged.
pub fn substitute_placeholder(template: &str, placeholder: &str, cards: &str) -> String {
    if !template.contains(placeholder) {
        log::warn!("Template does not contain placeholder {}; output equals template", placeholder);
    }
    template.replacen(placeholder, cards, 1)
}

/// Build the full page text without writing anything
pub fn build_page(config: &Config) -> Result<(usize, String)> {
    let root = config.root_dir();
    let agents = discover_agents(&root, &config.files.metadata)?;

    let mut cards = Vec::with_capacity(agents.len());
    for agent in agents {
        let icon = load_icon(&agent, &config.files.icon)?;
        cards.push(Card { agent, icon });
    }

    let template_path = config.template_path();
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let page = substitute_placeholder(&template, &config.placeholder, &render_cards(&cards));
    Ok((cards.len(), page))
}

/// Generate the page and write it to the configured output path
pub fn run(config: &Config) -> Result<Summary> {
    let (agents, page) = build_page(config)?;
    let output = config.output_path();

    fs::write(&output, page).with_context(|| format!("Failed to write output: {}", output.display()))?;
    log::info!("Wrote {} agent cards to {}", agents, output.display());

    Ok(Summary { agents, output })
}

/// Generate the page and compare it with the existing output, writing nothing
pub fn check(config: &Config) -> Result<Summary> {
    let (agents, page) = build_page(config)?;
    let output = config.output_path();

    ensure_up_to_date(&output, &page)?;
    log::info!("{} is up to date ({} agent cards)", output.display(), agents);

    Ok(Summary { agents, output })
}

fn ensure_up_to_date(output: &Path, page: &str) -> Result<()> {
    if !output.exists() {
        eyre::bail!("{} does not exist; run agent-cards to generate it", output.display());
    }

    let existing =
        fs::read_to_string(output).with_context(|| format!("Failed to read output: {}", output.display()))?;
    if existing != page {
        eyre::bail!("{} is out of date; run agent-cards to regenerate it", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: &str = "---\ntitle: Agents\n---\n\n$$AGENTS_CARDS$$\n";

    fn setup_root(template: &str) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs").join("_index.mdx"), template).unwrap();

        let mut config = Config::default();
        config.paths.root = temp.path().to_path_buf();
        (temp, config)
    }

    fn add_agent(root: &Path, dir: &str, json: &str, icon: Option<&str>) {
        let agent_dir = root.join(dir);
        fs::create_dir_all(&agent_dir).unwrap();
        fs::write(agent_dir.join("agent.json"), json).unwrap();
        if let Some(svg) = icon {
            fs::write(agent_dir.join("icon.svg"), svg).unwrap();
        }
    }

    #[test]
    fn test_substitute_replaces_placeholder() {
        assert_eq!(substitute_placeholder("a $$X$$ b", "$$X$$", "cards"), "a cards b");
    }

    #[test]
    fn test_substitute_replaces_only_first_occurrence() {
        assert_eq!(substitute_placeholder("$$X$$ $$X$$", "$$X$$", "c"), "c $$X$$");
    }

    #[test]
    fn test_substitute_missing_placeholder_is_noop() {
        assert_eq!(substitute_placeholder("no token here", "$$X$$", "cards"), "no token here");
    }

    #[test]
    fn test_run_writes_output() {
        let (temp, config) = setup_root(TEMPLATE);
        add_agent(temp.path(), "beta", r#"{"name": "beta", "version": "2.0"}"#, None);
        add_agent(
            temp.path(),
            "alpha",
            r#"{"name": "Alpha", "repository": "https://example.com/alpha"}"#,
            Some(r#"<svg width="100" height="100" class="foo"><path fill-rule="evenodd"/></svg>"#),
        );

        let summary = run(&config).unwrap();
        assert_eq!(summary.agents, 2);
        assert_eq!(summary.output, temp.path().join("docs").join("index.mdx"));

        let output = fs::read_to_string(&summary.output).unwrap();
        assert!(output.starts_with("---\ntitle: Agents\n---\n\n<Columns cols={2}>\n"));
        assert!(output.ends_with("</Columns>\n"));
        assert!(!output.contains("$$AGENTS_CARDS$$"));
        assert!(output.find("title=\"Alpha\"").unwrap() < output.find("title=\"beta\"").unwrap());
        assert!(output.contains(r#"<path fillRule="evenodd"/>"#));
        assert!(output.contains("<p><code>2.0</code></p>"));
        assert!(output.contains("<p><code>version unknown</code></p>"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let (temp, config) = setup_root(TEMPLATE);
        add_agent(temp.path(), "one", r#"{"id": "one"}"#, Some("<svg><g/></svg>"));

        let first = run(&config).unwrap();
        let first_text = fs::read(&first.output).unwrap();
        let second = run(&config).unwrap();
        let second_text = fs::read(&second.output).unwrap();

        assert_eq!(first_text, second_text);
    }

    #[test]
    fn test_run_without_placeholder_copies_template() {
        let (temp, config) = setup_root("# Static page\n");
        add_agent(temp.path(), "one", r#"{"id": "one"}"#, None);

        let summary = run(&config).unwrap();
        assert_eq!(fs::read_to_string(summary.output).unwrap(), "# Static page\n");
    }

    #[test]
    fn test_run_missing_template_fails() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.root = temp.path().to_path_buf();

        let err = run(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read template"));
    }

    #[test]
    fn test_run_malformed_metadata_writes_nothing() {
        let (temp, config) = setup_root(TEMPLATE);
        add_agent(temp.path(), "broken", "{ not json", None);

        assert!(run(&config).is_err());
        assert!(!config.output_path().exists());
    }

    #[test]
    fn test_check_fresh_output() {
        let (temp, config) = setup_root(TEMPLATE);
        add_agent(temp.path(), "one", r#"{"id": "one"}"#, None);

        run(&config).unwrap();
        let summary = check(&config).unwrap();
        assert_eq!(summary.agents, 1);
    }

    #[test]
    fn test_check_stale_output() {
        let (temp, config) = setup_root(TEMPLATE);
        add_agent(temp.path(), "one", r#"{"id": "one"}"#, None);
        run(&config).unwrap();

        add_agent(temp.path(), "two", r#"{"id": "two"}"#, None);
        let err = check(&config).unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn test_check_missing_output() {
        let (_temp, config) = setup_root(TEMPLATE);

        let err = check(&config).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!config.output_path().exists());
    }
}
