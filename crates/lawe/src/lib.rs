pub use lawe_core::*;
pub use lawe_resonance::{
    classify_resonance, Language, LexiconEntry, LexiconError, ResonanceDetector,
    ResonanceIndicators, SignalCategory, DEFAULT_LEXICON,
};
