//! services/api/src/web/page.rs
//!
//! Server-side rendering of the single HTML page: the submission form plus
//! either nothing, a summary, or an error message.

use video_summarizer_core::domain::{SummaryOutcome, SummaryReport};

const LAYOUT: &str = include_str!("../../templates/layout.html");

/// Escapes text for use in HTML element content and double-quoted attributes.
///
/// Braces are escaped too so user text can never form a layout placeholder.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_layout(reference: &str, content: &str) -> String {
    LAYOUT
        .replace("{{content}}", content)
        .replace("{{reference}}", &escape_html(reference))
}

/// The empty form.
pub fn render_index() -> String {
    render_layout("", "")
}

/// The form, pre-filled with `reference`, followed by the request's outcome.
pub fn render_outcome(reference: &str, outcome: &SummaryOutcome) -> String {
    let content = match outcome {
        SummaryOutcome::Success(report) => render_report(report),
        SummaryOutcome::Failure { kind, message } => format!(
            r#"<div id="errorContainer" data-kind="{}" class="mt-4 bg-red-100 text-red-800 p-3 rounded-md">{}</div>"#,
            kind.as_str(),
            escape_html(message)
        ),
    };
    render_layout(reference, &content)
}

fn render_report(report: &SummaryReport) -> String {
    let paragraphs: String = report
        .summary
        .as_str()
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!(r#"<p class="mb-2">{}</p>"#, escape_html(p)))
        .collect();

    format!(
        r#"<div id="resultContainer" class="mt-4">
            <div id="summarySection">
                <h2 class="font-bold mb-2">Summary:</h2>
                <div id="summaryContent" class="bg-blue-50 p-3 rounded-md">{summary}</div>
            </div>
            <div id="transcriptSection" class="mt-4">
                <h2 class="font-bold mb-2">Transcript:</h2>
                <div id="transcriptContent" class="bg-gray-100 p-3 rounded-md max-h-48 overflow-y-auto text-sm">{transcript}</div>
            </div>
            <p class="mt-2 text-xs text-gray-500">Video {video_id} &middot; generated {generated_at}</p>
        </div>"#,
        summary = paragraphs,
        transcript = escape_html(report.transcript.as_str()),
        video_id = escape_html(report.video_id.as_str()),
        generated_at = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use video_summarizer_core::domain::{SummaryText, TranscriptText, VideoId};
    use video_summarizer_core::error::ErrorKind;

    #[test]
    fn escapes_markup_quotes_and_braces() {
        assert_eq!(
            escape_html(r#"<b a="1">'{{x}}' & co</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&#39;&#123;&#123;x&#125;&#125;&#39; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn index_has_an_empty_form_and_no_placeholders() {
        let html = render_index();
        assert!(html.contains(r#"action="/summarize""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn success_renders_summary_paragraphs_and_transcript() {
        let outcome = SummaryOutcome::Success(SummaryReport {
            video_id: VideoId::parse("dQw4w9WgXcQ").unwrap(),
            transcript: TranscriptText::new("a <transcript>"),
            summary: SummaryText::new("First point.\n\nSecond & last."),
            generated_at: Utc::now(),
        });

        let html = render_outcome("dQw4w9WgXcQ", &outcome);

        assert!(html.contains(r#"<p class="mb-2">First point.</p>"#));
        assert!(html.contains(r#"<p class="mb-2">Second &amp; last.</p>"#));
        assert!(html.contains("a &lt;transcript&gt;"));
        assert!(html.contains(r#"value="dQw4w9WgXcQ""#));
        assert!(!html.contains("errorContainer"));
    }

    #[test]
    fn failure_renders_the_kind_and_escaped_message() {
        let outcome = SummaryOutcome::Failure {
            kind: ErrorKind::InvalidReference,
            message: r#"Invalid YouTube URL or video ID: "<script>""#.to_string(),
        };

        let html = render_outcome("<script>", &outcome);

        assert!(html.contains(r#"data-kind="invalid_reference""#));
        assert!(html.contains("&quot;&lt;script&gt;&quot;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("resultContainer"));
    }
}
