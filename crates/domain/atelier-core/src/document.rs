use serde::{Deserialize, Serialize};

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocType {
    #[serde(rename = "реферат")]
    Essay,
    #[serde(rename = "курсовая")]
    TermPaper,
    #[serde(rename = "доклад")]
    Report,
    #[serde(rename = "эссе")]
    ShortEssay,
}

impl DocType {
    pub const ALL: [DocType; 4] = [
        DocType::Essay,
        DocType::TermPaper,
        DocType::Report,
        DocType::ShortEssay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocType::Essay => "Essay",
            DocType::TermPaper => "Term paper",
            DocType::Report => "Report",
            DocType::ShortEssay => "Short essay",
        }
    }

    /// Wire tag, also used as the exported file name prefix.
    pub fn tag(self) -> &'static str {
        match self {
            DocType::Essay => "реферат",
            DocType::TermPaper => "курсовая",
            DocType::Report => "доклад",
            DocType::ShortEssay => "эссе",
        }
    }
}

/// Parameters shared by the topics and document phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub doc_type: DocType,
    pub subject: String,
    pub pages: u32,
    pub additional_info: String,
}

impl Default for DocumentRequest {
    fn default() -> Self {
        Self {
            doc_type: DocType::Essay,
            subject: String::new(),
            pages: atelier_config::DEFAULT_PAGES,
            additional_info: String::new(),
        }
    }
}

impl DocumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if crate::is_blank(&self.subject) {
            return Err(ValidationError::EmptySubject);
        }
        Ok(())
    }

    /// Page count is clamped at input time, so stored values stay in range.
    pub fn set_pages(&mut self, v: i64) {
        self.pages = atelier_config::clamp_pages(v);
    }
}

/// One proposed section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicField {
    Title,
    Description,
}

/// The ordered, user-editable outline mediating between topic proposal and
/// document assembly. Edits never reorder entries or change the length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicOutline {
    entries: Vec<TopicEntry>,
}

impl TopicOutline {
    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace exactly one field of exactly one entry. Callers only pass
    /// indices of rendered entries, so out-of-bounds indices are ignored.
    pub fn update(&mut self, index: usize, field: TopicField, value: String) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        match field {
            TopicField::Title => entry.title = value,
            TopicField::Description => entry.description = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::EmptyOutline);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> TopicOutline {
        TopicOutline::new(vec![
            TopicEntry {
                title: "Введение".into(),
                description: "Обзор темы".into(),
            },
            TopicEntry {
                title: "История".into(),
                description: "Основные этапы".into(),
            },
        ])
    }

    #[test]
    fn update_touches_exactly_one_field() {
        let mut o = outline();
        let before = o.clone();

        o.update(1, TopicField::Title, "Хронология".into());

        assert_eq!(o.len(), before.len());
        assert_eq!(o.entries()[0], before.entries()[0]);
        assert_eq!(o.entries()[1].title, "Хронология");
        assert_eq!(o.entries()[1].description, before.entries()[1].description);
    }

    #[test]
    fn update_out_of_bounds_is_a_noop() {
        let mut o = outline();
        let before = o.clone();
        o.update(5, TopicField::Description, "x".into());
        assert_eq!(o, before);
    }

    #[test]
    fn empty_outline_blocks_document_generation() {
        assert_eq!(
            TopicOutline::default().validate(),
            Err(ValidationError::EmptyOutline)
        );
        assert_eq!(outline().validate(), Ok(()));
    }

    #[test]
    fn doc_type_tags_match_endpoint_contract() {
        assert_eq!(serde_json::to_string(&DocType::Essay).unwrap(), "\"реферат\"");
        assert_eq!(
            serde_json::to_string(&DocType::TermPaper).unwrap(),
            "\"курсовая\""
        );
    }

    #[test]
    fn set_pages_clamps_at_input_time() {
        let mut req = DocumentRequest::default();
        req.set_pages(0);
        assert_eq!(req.pages, 1);
        req.set_pages(500);
        assert_eq!(req.pages, 100);
        req.set_pages(15);
        assert_eq!(req.pages, 15);
    }
}
