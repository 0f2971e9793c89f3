use std::path::Path;

use anyhow::{Context, Result};

use atelier_core::{export, DocumentRequest};

/// Suggested name for the document save dialog, derived from the request.
pub fn suggested_document_file_name(req: &DocumentRequest) -> String {
    export::document_file_name(req.doc_type, &req.subject)
}

/// Suggested name for the image save dialog, stamped with the current time.
pub fn suggested_image_file_name() -> String {
    export::image_file_name(chrono::Utc::now().timestamp())
}

pub fn save_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::DocType;

    #[test]
    fn document_name_follows_request() {
        let req = DocumentRequest {
            doc_type: DocType::Essay,
            subject: "История Рима".into(),
            ..Default::default()
        };
        assert_eq!(suggested_document_file_name(&req), "реферат_История Рима.txt");
    }

    #[test]
    fn save_text_writes_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        save_text(&path, "ВВЕДЕНИЕ\nТекст.").expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "ВВЕДЕНИЕ\nТекст."
        );
    }
}
