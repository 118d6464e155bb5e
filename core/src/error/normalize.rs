use thiserror::Error;

/// Failure modes of pulling the assignment list out of a model reply.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("no JSON object found in reply")]
    NoJsonFound { content: String },

    #[error("reply JSON failed to parse: {source}")]
    InvalidJson {
        candidate: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("reply JSON has no `assignments` array")]
    MissingAssignments,
}

/// Raised by strict assignment validation only.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("assignment {index} is not an object")]
    NotAnObject { index: usize },

    #[error("assignment {index} has an empty or missing `text`")]
    MissingText { index: usize },

    #[error("assignment {index} has invalid priority {value:?}")]
    InvalidPriority { index: usize, value: String },
}
