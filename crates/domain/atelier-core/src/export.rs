//! File naming for exported results. Construction is purely local; the
//! write itself happens in the application layer.

use crate::DocType;

/// `{doc type tag}_{subject}.txt`, subject truncated to a fixed number of
/// characters (not bytes, so multi-byte subjects stay intact).
pub fn document_file_name(doc_type: DocType, subject: &str) -> String {
    let slug: String = subject
        .trim()
        .chars()
        .take(atelier_config::EXPORT_SLUG_CHARS)
        .collect();
    format!("{}_{}.txt", doc_type.tag(), slug)
}

/// Image exports are named by capture time since the URL itself is opaque.
pub fn image_file_name(unix_ts: i64) -> String {
    format!("atelier_image_{unix_ts}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_name_truncates_on_char_boundaries() {
        let subject = "История Рима от основания города до падения империи";
        let name = document_file_name(DocType::Essay, subject);
        assert!(name.starts_with("реферат_"));
        assert!(name.ends_with(".txt"));
        let slug = name
            .strip_prefix("реферат_")
            .and_then(|s| s.strip_suffix(".txt"))
            .unwrap();
        assert_eq!(slug.chars().count(), 30);
    }

    #[test]
    fn short_subjects_pass_through() {
        assert_eq!(
            document_file_name(DocType::Report, " Кофе "),
            "доклад_Кофе.txt"
        );
    }

    #[test]
    fn image_name_embeds_timestamp() {
        assert_eq!(image_file_name(1700000000), "atelier_image_1700000000.png");
    }
}
