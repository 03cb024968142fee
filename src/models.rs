use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum OutputLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl OutputLanguage {
    pub const ALL: [OutputLanguage; 2] = [OutputLanguage::English, OutputLanguage::Hindi];

    /// Value sent in the `language` form field.
    pub fn as_wire(self) -> &'static str {
        match self {
            OutputLanguage::English => "en",
            OutputLanguage::Hindi => "hi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Hindi => "Hindi",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_wire() == value)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    #[default]
    StudyGuide,
    MediumArticlesAiMl,
    MediumArticlesCloud,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::StudyGuide,
        SummaryStyle::MediumArticlesAiMl,
        SummaryStyle::MediumArticlesCloud,
    ];

    /// Value sent in the `summary_type` form field.
    pub fn as_wire(self) -> &'static str {
        match self {
            SummaryStyle::StudyGuide => "study_guide",
            SummaryStyle::MediumArticlesAiMl => "medium_articles_ai_ml",
            SummaryStyle::MediumArticlesCloud => "medium_articles_cloud",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryStyle::StudyGuide => "Study Guide",
            SummaryStyle::MediumArticlesAiMl => "Medium Articles AI/ML",
            SummaryStyle::MediumArticlesCloud => "Medium Articles Cloud",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusArea {
    Url,
    Language,
    Style,
    Submit,
    Summary,
    Answer,
}

impl FocusArea {
    const ORDER: [FocusArea; 6] = [
        FocusArea::Url,
        FocusArea::Language,
        FocusArea::Style,
        FocusArea::Submit,
        FocusArea::Summary,
        FocusArea::Answer,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

/// The two strings shown in the output regions after a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryOutput {
    pub summary: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_backend_form_fields() {
        assert_eq!(OutputLanguage::English.as_wire(), "en");
        assert_eq!(OutputLanguage::Hindi.as_wire(), "hi");
        assert_eq!(SummaryStyle::StudyGuide.as_wire(), "study_guide");
        assert_eq!(SummaryStyle::MediumArticlesAiMl.as_wire(), "medium_articles_ai_ml");
        assert_eq!(SummaryStyle::MediumArticlesCloud.as_wire(), "medium_articles_cloud");
    }

    #[test]
    fn from_wire_accepts_only_known_values() {
        assert_eq!(OutputLanguage::from_wire("hi"), Some(OutputLanguage::Hindi));
        assert_eq!(OutputLanguage::from_wire("de"), None);
        assert_eq!(
            SummaryStyle::from_wire("medium_articles_cloud"),
            Some(SummaryStyle::MediumArticlesCloud)
        );
        assert_eq!(SummaryStyle::from_wire("Study Guide"), None);
    }

    #[test]
    fn selectors_wrap_in_both_directions() {
        assert_eq!(OutputLanguage::Hindi.next(), OutputLanguage::English);
        assert_eq!(OutputLanguage::English.prev(), OutputLanguage::Hindi);
        assert_eq!(SummaryStyle::MediumArticlesCloud.next(), SummaryStyle::StudyGuide);
        assert_eq!(SummaryStyle::StudyGuide.prev(), SummaryStyle::MediumArticlesCloud);
        assert_eq!(FocusArea::Answer.next(), FocusArea::Url);
        assert_eq!(FocusArea::Url.prev(), FocusArea::Answer);
    }

    #[test]
    fn defaults_are_english_study_guide() {
        assert_eq!(OutputLanguage::default(), OutputLanguage::English);
        assert_eq!(SummaryStyle::default(), SummaryStyle::StudyGuide);
    }
}
