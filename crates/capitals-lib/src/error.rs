use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the capitals library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Searches never produce these: an exhausted frontier is reported as a
/// [`SearchResult`](crate::SearchResult) with an empty path. Errors only come
/// from the edges of the library (name resolution, parsing, I/O).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a city name could not be found in the graph.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a relation selector is neither `air` nor `land`.
    #[error("unknown relation '{value}'; expected 'air' or 'land'")]
    UnknownRelation { value: String },

    /// Raised when an algorithm name does not match any search strategy.
    #[error("unknown algorithm '{value}'; expected one of bfs, dfs, ucs, greedy, astar")]
    UnknownAlgorithm { value: String },

    /// Raised when a dataset contains a negative or non-finite distance.
    #[error("invalid distance {value} between {origin} and {destination}")]
    InvalidDistance {
        origin: String,
        destination: String,
        value: f64,
    },

    /// Raised when a CSV distance matrix cannot be interpreted.
    #[error("malformed distance matrix at line {line}: {message}")]
    MalformedMatrix { line: usize, message: String },

    /// Dataset could not be located at the requested path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a report is requested for a suite without scenarios.
    #[error("scenario suite is empty")]
    EmptyScenarioSuite,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV reading and writing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
