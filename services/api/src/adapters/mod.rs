pub mod summary_llm;
pub mod youtube;

pub use summary_llm::OpenAiSummaryAdapter;
pub use youtube::YouTubeTranscriptAdapter;
