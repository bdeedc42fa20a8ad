use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    English,
    French,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalCategory {
    SelfPositioning,
    OperationalTranslation,
}

#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub language: Language,
    pub category: SignalCategory,
    pub pattern: &'static str,
}

const fn entry(
    language: Language,
    category: SignalCategory,
    pattern: &'static str,
) -> LexiconEntry {
    LexiconEntry {
        language,
        category,
        pattern,
    }
}

// `me` appears in both language tables and counts once per table; `je`
// carries no leading word boundary. Scores depend on both quirks.
pub static DEFAULT_LEXICON: &[LexiconEntry] = &[
    entry(
        Language::English,
        SignalCategory::SelfPositioning,
        r"\bI\b",
    ),
    entry(
        Language::English,
        SignalCategory::SelfPositioning,
        r"\bme\b",
    ),
    entry(
        Language::English,
        SignalCategory::SelfPositioning,
        r"\bmy\b",
    ),
    entry(
        Language::English,
        SignalCategory::SelfPositioning,
        r"\bmyself\b",
    ),
    entry(Language::French, SignalCategory::SelfPositioning, r"je\b"),
    entry(
        Language::French,
        SignalCategory::SelfPositioning,
        r"\bme\b",
    ),
    entry(
        Language::French,
        SignalCategory::SelfPositioning,
        r"\bmoi\b",
    ),
    entry(
        Language::English,
        SignalCategory::SelfPositioning,
        r"this (affects|transforms|changes) me",
    ),
    entry(
        Language::French,
        SignalCategory::SelfPositioning,
        r"(cela|ça) me (transforme|affecte|change)",
    ),
    entry(
        Language::English,
        SignalCategory::OperationalTranslation,
        r"\b(implement|apply|use|integrate|adopt)\b",
    ),
    entry(
        Language::English,
        SignalCategory::OperationalTranslation,
        r"\b(could|would|should) (be|become)\b",
    ),
    entry(
        Language::French,
        SignalCategory::OperationalTranslation,
        r"\b(implémenter|appliquer|utiliser|intégrer|adopter)\b",
    ),
    entry(
        Language::French,
        SignalCategory::OperationalTranslation,
        r"\b(pourrait|devrait) (être|devenir)\b",
    ),
];
