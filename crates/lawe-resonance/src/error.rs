use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
