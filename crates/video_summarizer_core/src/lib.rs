pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod reference;
pub mod summary;
pub mod transcript;

pub use domain::{SummaryOutcome, SummaryReport, SummaryText, TranscriptSegment, TranscriptText, VideoId};
pub use error::{ErrorKind, SummarizeError};
pub use pipeline::{InvalidTransition, RequestState, SummaryPipeline};
pub use ports::{CompletionProvider, PortError, PortResult, TranscriptProvider};
pub use summary::{SummaryGenerator, DEFAULT_SUMMARY_TIMEOUT};
pub use transcript::{TranscriptFetcher, DEFAULT_TRANSCRIPT_TIMEOUT};
