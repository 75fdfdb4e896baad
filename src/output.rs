//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable cards or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Catalog, Item};
use crate::core::services::ScoredItem;

/// Message shown in place of cards when nothing matched
pub const NO_MATCHES: &str = "No matches found. Try adjusting your preferences!";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One recommendation, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCard {
    /// Item title
    pub title: String,
    /// Item category
    pub category: String,
    /// Item mood
    pub mood: String,
    /// Duration in minutes
    pub time_minutes: u32,
    /// Match score, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Match label, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Item> for RecommendationCard {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title().to_string(),
            category: item.category().to_string(),
            mood: item.mood().to_string(),
            time_minutes: item.time_minutes(),
            score: None,
            message: None,
        }
    }
}

impl From<&ScoredItem<'_>> for RecommendationCard {
    fn from(scored: &ScoredItem<'_>) -> Self {
        Self {
            score: Some(scored.score),
            message: Some(scored.message.to_string()),
            ..Self::from(scored.item)
        }
    }
}

impl RecommendationCard {
    fn write_human(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.title.bold());
        let _ = writeln!(out, "  Category: {}", self.category);
        let _ = writeln!(out, "  Mood: {}", self.mood);
        let _ = writeln!(out, "  Time: {} minutes", self.time_minutes);
        if let (Some(score), Some(message)) = (self.score, &self.message) {
            let _ = writeln!(out, "  Match: {} ({score}/3)", message.green());
        }
    }
}

/// Result of a recommendation query
#[derive(Debug, Serialize)]
pub struct RecommendationList {
    /// Catalog domain
    pub domain: String,
    /// Number of matches
    pub count: usize,
    /// Matches in catalog order
    pub matches: Vec<RecommendationCard>,
}

impl RecommendationList {
    /// Build a result from cards
    #[must_use]
    pub fn new(domain: impl Into<String>, matches: Vec<RecommendationCard>) -> Self {
        Self {
            domain: domain.into(),
            count: matches.len(),
            matches,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human_string()),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human_string(&self) -> String {
        if self.matches.is_empty() {
            return format!("{NO_MATCHES}\n");
        }

        let mut out = String::new();
        let _ = writeln!(out, "{} recommendation(s) for {}:\n", self.count, self.domain);
        for card in &self.matches {
            card.write_human(&mut out);
            out.push('\n');
        }
        out
    }
}

/// Full catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    /// Catalog domain
    pub domain: String,
    /// Catalog description
    pub description: String,
    /// Where the catalog was loaded from
    pub source: String,
    /// Every item, in catalog order
    pub options: Vec<RecommendationCard>,
}

impl CatalogListing {
    /// Build a listing for a catalog
    #[must_use]
    pub fn new(catalog: &Catalog, source: impl Into<String>) -> Self {
        Self {
            domain: catalog.domain().to_string(),
            description: catalog.description().to_string(),
            source: source.into(),
            options: catalog.iter().map(RecommendationCard::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human_string()),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.domain.bold(), self.source);
        if !self.description.is_empty() {
            let _ = writeln!(out, "{}", self.description);
        }
        out.push('\n');

        if self.options.is_empty() {
            out.push_str("Catalog is empty.\n");
            return out;
        }

        for card in &self.options {
            card.write_human(&mut out);
            out.push('\n');
        }
        out
    }
}

/// Classification of a single score
#[derive(Debug, Serialize)]
pub struct MatchMessageResult {
    /// The score that was classified
    pub score: i64,
    /// Its label
    pub message: String,
}

impl MatchMessageResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
