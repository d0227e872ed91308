//! Offline translation notice
//!
//! No local translation is attempted; this is the message shown once every
//! translation service has failed.

/// Heading for a translation into `target`
pub fn translation_label(target: &str) -> &'static str {
    if target == "ar" {
        "الترجمة العربية"
    } else {
        "English Translation"
    }
}

pub fn unavailable_notice(source: &str, target: &str) -> String {
    match (source, target) {
        ("en", "ar") => "[الترجمة العربية ستظهر هنا]<br><br>\
             <em>⚠️ خدمة الترجمة غير متاحة مؤقتاً. يرجى المحاولة لاحقاً.</em>"
            .to_string(),
        ("ar", "en") => "[English translation would appear here]<br><br>\
             <em>⚠️ Translation service temporarily unavailable. Please try again later.</em>"
            .to_string(),
        _ => "Translation service temporarily unavailable.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_per_pair() {
        assert!(unavailable_notice("en", "ar").contains("خدمة الترجمة"));
        assert!(unavailable_notice("ar", "en").contains("temporarily unavailable"));
        assert_eq!(
            unavailable_notice("en", "fr"),
            "Translation service temporarily unavailable."
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(translation_label("en"), "English Translation");
        assert_eq!(translation_label("ar"), "الترجمة العربية");
    }
}
