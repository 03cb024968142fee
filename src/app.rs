use chrono::{DateTime, Local};

use crate::models::{FocusArea, OutputLanguage, SummaryOutput, SummaryStyle};
use crate::network::IngestRequest;

/// Everything the form shows. Mutated only on the UI thread.
pub struct App {
    pub source_url: String,
    pub language: OutputLanguage,
    pub summary_style: SummaryStyle,
    pub summary: String,
    pub answer: String,
    pub focus: FocusArea,
    pub summary_scroll: u16,
    pub answer_scroll: u16,
    pub status: Option<String>,
    pub last_completed: Option<DateTime<Local>>,
    in_flight: bool,
}

impl App {
    pub fn new(language: OutputLanguage, summary_style: SummaryStyle) -> Self {
        Self {
            source_url: String::new(),
            language,
            summary_style,
            summary: String::new(),
            answer: String::new(),
            focus: FocusArea::Url,
            summary_scroll: 0,
            answer_scroll: 0,
            status: None,
            last_completed: None,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks a request as outstanding and snapshots the form.
    /// Returns `None` while another request is still running.
    pub fn begin_submit(&mut self) -> Option<IngestRequest> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.status = None;
        Some(IngestRequest {
            youtube_url: self.source_url.clone(),
            language: self.language,
            summary_type: self.summary_style,
        })
    }

    /// Writes a completed submission back. Last write wins.
    pub fn finish_submit(&mut self, output: SummaryOutput) {
        self.summary = output.summary;
        self.answer = output.answer;
        self.summary_scroll = 0;
        self.answer_scroll = 0;
        self.in_flight = false;
        self.last_completed = Some(Local::now());
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight { "Summarizing..." } else { "Summarize & Q&A" }
    }

    /// Text of the focused output region, if an output region has focus.
    pub fn focused_output(&self) -> Option<(&'static str, &str)> {
        match self.focus {
            FocusArea::Summary => Some(("summary", &self.summary)),
            FocusArea::Answer => Some(("answer", &self.answer)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(OutputLanguage::English, SummaryStyle::StudyGuide)
    }

    #[test]
    fn starts_idle_and_empty() {
        let app = app();
        assert!(!app.is_in_flight());
        assert_eq!(app.source_url, "");
        assert_eq!(app.summary, "");
        assert_eq!(app.answer, "");
        assert_eq!(app.submit_label(), "Summarize & Q&A");
    }

    #[test]
    fn begin_submit_snapshots_current_values() {
        let mut app = app();
        app.source_url = "https://youtu.be/abc".into();
        app.language = OutputLanguage::Hindi;
        app.summary_style = SummaryStyle::MediumArticlesCloud;

        let req = app.begin_submit().unwrap();
        assert_eq!(req.youtube_url, "https://youtu.be/abc");
        assert_eq!(req.language, OutputLanguage::Hindi);
        assert_eq!(req.summary_type, SummaryStyle::MediumArticlesCloud);
        assert!(app.is_in_flight());
        assert_eq!(app.submit_label(), "Summarizing...");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut app = app();
        assert!(app.begin_submit().is_some());
        assert!(app.begin_submit().is_none());
        assert!(app.is_in_flight());
    }

    #[test]
    fn finish_submit_clears_flag_and_overwrites_outputs() {
        let mut app = app();
        app.begin_submit();
        app.summary_scroll = 4;
        app.finish_submit(SummaryOutput {
            summary: "S".into(),
            answer: "A".into(),
        });
        assert!(!app.is_in_flight());
        assert_eq!(app.summary, "S");
        assert_eq!(app.answer, "A");
        assert_eq!(app.summary_scroll, 0);
        assert!(app.last_completed.is_some());
        assert!(app.begin_submit().is_some());
    }

    #[test]
    fn failure_text_clears_previous_answer() {
        let mut app = app();
        app.begin_submit();
        app.finish_submit(SummaryOutput {
            summary: "S".into(),
            answer: "A".into(),
        });
        app.begin_submit();
        app.finish_submit(SummaryOutput {
            summary: "Error fetching summary: Status: 500, Data: {}".into(),
            answer: String::new(),
        });
        assert!(app.summary.starts_with("Error fetching summary"));
        assert_eq!(app.answer, "");
        assert!(!app.is_in_flight());
    }

    #[test]
    fn late_result_overwrites_even_after_edits() {
        let mut app = app();
        app.source_url = "first".into();
        app.begin_submit();
        app.source_url = "second".into();
        app.language = OutputLanguage::Hindi;
        app.finish_submit(SummaryOutput {
            summary: "for first".into(),
            answer: String::new(),
        });
        assert_eq!(app.summary, "for first");
        assert_eq!(app.source_url, "second");
    }

    #[test]
    fn focused_output_only_for_output_regions() {
        let mut app = app();
        app.summary = "S".into();
        assert_eq!(app.focused_output(), None);
        app.focus = FocusArea::Summary;
        assert_eq!(app.focused_output(), Some(("summary", "S")));
    }
}
