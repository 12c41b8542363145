// 🏷️ Rewrite Rules - Rules as Data
// Batches of pattern substitutions applied to the normalized words of a language

use crate::dataset::Dataset;
use anyhow::{Context as AnyhowContext, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Rule ID for tracking
    pub id: String,

    /// Catalog language whose words are rewritten
    pub language: String,

    /// Regular expression matched against the normalized form
    pub pattern: String,

    /// Replacement text (`$1` style group references allowed)
    pub replacement: String,

    pub description: Option<String>,

    /// Priority (higher = applied first)
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    0
}

/// A rule whose pattern has been compiled
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: RewriteRule,
    regex: Regex,
}

// ============================================================================
// APPLICATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub rule_id: String,
    pub language: String,
    /// Words whose normalized form changed
    pub changed: usize,
}

// ============================================================================
// REWRITE ENGINE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RewriteEngine {
    rules: Vec<CompiledRule>,
}

impl RewriteEngine {
    pub fn new() -> Self {
        RewriteEngine { rules: Vec::new() }
    }

    /// Load rules from a JSON array
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read rules file: {:?}", path.as_ref()))?;

        let rules: Vec<RewriteRule> = serde_json::from_str(&content)
            .context("Failed to parse rules JSON")?;

        RewriteEngine::from_rules(rules)
    }

    /// Compile every pattern; fails on the first invalid one
    pub fn from_rules(rules: Vec<RewriteRule>) -> Result<Self> {
        let mut engine = RewriteEngine::new();
        for rule in rules {
            engine.add_rule(rule)?;
        }
        Ok(engine)
    }

    pub fn add_rule(&mut self, rule: RewriteRule) -> Result<()> {
        let regex = Regex::new(&rule.pattern)
            .with_context(|| format!("Invalid pattern in rule {}: {:?}", rule.id, rule.pattern))?;
        self.rules.push(CompiledRule { rule, regex });
        // Stable: equal priorities keep insertion order
        self.rules.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));
        Ok(())
    }

    /// Run every rule in priority order against `dataset`
    pub fn apply(&self, dataset: &mut Dataset) -> Vec<RewriteOutcome> {
        self.rules
            .iter()
            .map(|compiled| {
                let rule = &compiled.rule;
                let changed =
                    dataset.transform_words_in_language(&rule.language, &compiled.regex, &rule.replacement);
                tracing::info!(rule = %rule.id, language = %rule.language, changed, "rewrite rule applied");
                RewriteOutcome {
                    rule_id: rule.id.clone(),
                    language: rule.language.clone(),
                    changed,
                }
            })
            .collect()
    }

    /// Rules in application order
    pub fn rules(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter().map(|c| &c.rule)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
