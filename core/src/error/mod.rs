#[allow(clippy::module_inception)]
pub mod error;
pub mod completion;
pub mod normalize;

pub use completion::{CompletionError, TransportErrorKind};
pub use error::{AnalyzeError, CliError};
pub use normalize::{AssignmentError, NormalizeError};
