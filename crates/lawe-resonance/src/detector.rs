use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::LexiconError;
use crate::lexicon::{LexiconEntry, SignalCategory, DEFAULT_LEXICON};

const WORD_PATTERN: &str = r"\b\w{4,}\b";
const ENRICHMENT_SCALE: f32 = 2.0;
const SELF_SATURATION: f32 = 3.0;
const OPERATIONAL_SATURATION: f32 = 2.0;

#[derive(Debug, Clone, Serialize)]
pub struct ResonanceIndicators {
    pub semantic_enrichment: f32,
    pub self_positioning: f32,
    pub operational_translation: f32,
    pub overall_resonance: f32,
}

#[derive(Debug)]
pub struct ResonanceDetector {
    word: Regex,
    self_positioning: Vec<Regex>,
    operational: Vec<Regex>,
}

impl ResonanceDetector {
    pub fn new() -> Result<Self, LexiconError> {
        Self::with_lexicon(DEFAULT_LEXICON)
    }

    pub fn with_lexicon(entries: &[LexiconEntry]) -> Result<Self, LexiconError> {
        let mut self_positioning = Vec::new();
        let mut operational = Vec::new();
        for entry in entries {
            let compiled = compile(entry.pattern)?;
            match entry.category {
                SignalCategory::SelfPositioning => self_positioning.push(compiled),
                SignalCategory::OperationalTranslation => operational.push(compiled),
            }
        }

        Ok(Self {
            word: compile(WORD_PATTERN)?,
            self_positioning,
            operational,
        })
    }

    pub fn detect(&self, response: &str, principle: &str) -> ResonanceIndicators {
        let semantic_enrichment = self.semantic_enrichment(response, principle);
        let self_positioning = saturating_count(&self.self_positioning, response, SELF_SATURATION);
        let operational_translation =
            saturating_count(&self.operational, response, OPERATIONAL_SATURATION);

        let overall_resonance = 0.4 * semantic_enrichment
            + 0.3 * self_positioning
            + 0.3 * operational_translation;

        ResonanceIndicators {
            semantic_enrichment,
            self_positioning,
            operational_translation,
            overall_resonance,
        }
    }

    fn semantic_enrichment(&self, response: &str, principle: &str) -> f32 {
        let response_terms = self.terms(response);
        let principle_terms = self.terms(principle);
        let new_terms = response_terms.difference(&principle_terms).count();

        let ratio = new_terms as f32 / response_terms.len().max(1) as f32;
        (ratio * ENRICHMENT_SCALE).min(1.0)
    }

    fn terms(&self, text: &str) -> HashSet<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex, LexiconError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| LexiconError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn saturating_count(patterns: &[Regex], text: &str, saturation: f32) -> f32 {
    let count: usize = patterns.iter().map(|p| p.find_iter(text).count()).sum();
    (count as f32 / saturation).min(1.0)
}

pub fn classify_resonance(score: f32) -> &'static str {
    if score >= 0.7 {
        "Strong resonance"
    } else if score >= 0.4 {
        "Moderate resonance"
    } else if score >= 0.2 {
        "Weak resonance"
    } else {
        "No resonance detected"
    }
}
