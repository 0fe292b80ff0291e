//! WhatsApp deep-link construction
//!
//! Only builds URLs. Nothing here talks to a messaging service.

use crate::error::{AppError, AppResult};

const WHATSAPP_BASE: &str = "https://wa.me/";
const COUNTRY_CODE: &str = "62";

/// Turn a locally written Indonesian number into the international form
/// used in wa.me links: `0812-3333-4444` -> `6281233334444`.
///
/// Hyphens and whitespace are dropped, a leading `0` becomes `62` and a
/// leading `+62` loses its `+`. Any other shape is returned unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if let Some(rest) = compact.strip_prefix('0') {
        format!("{}{}", COUNTRY_CODE, rest)
    } else if let Some(rest) = compact.strip_prefix('+') {
        if rest.starts_with(COUNTRY_CODE) {
            rest.to_string()
        } else {
            compact
        }
    } else {
        compact
    }
}

/// Build `https://wa.me/<phone>?text=<percent-encoded text>`.
///
/// `phone` must already be normalized; a number that is empty or holds
/// anything but digits is rejected rather than put in the link path.
pub fn message_link(phone: &str, text: &str) -> AppResult<String> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "Phone number '{}' cannot be used in a WhatsApp link",
            phone
        )));
    }

    Ok(format!(
        "{}{}?text={}",
        WHATSAPP_BASE,
        phone,
        urlencoding::encode(text)
    ))
}

/// Message pre-filled in the chat with the reporter
pub fn report_message(reporter: &str, asset_name: &str, room: &str, complaint: &str) -> String {
    format!(
        "Halo {}, terkait laporan kerusakan {} di ruangan {}: {}",
        reporter, asset_name, room, complaint
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_local_number() {
        assert_eq!(normalize_phone("0812-3333-4444"), "6281233334444");
        assert_eq!(normalize_phone(" 0857 1234 5678 "), "6285712345678");
    }

    #[test]
    fn test_normalize_plus_country_code() {
        assert_eq!(normalize_phone("+62812-333-4444"), "628123334444");
    }

    #[test]
    fn test_normalize_passes_other_shapes_through() {
        assert_eq!(normalize_phone("628123334444"), "628123334444");
        assert_eq!(normalize_phone("+1 555 0100"), "+15550100");
        assert_eq!(normalize_phone("ext. 12"), "ext.12");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_message_link_shape() {
        let link = message_link("6281199998888", "Halo Dr. Rahmat, layar mati & bunyi!").unwrap();
        let (base, query) = link.split_once("?text=").unwrap();

        assert!(base.starts_with("https://wa.me/"));
        assert!(base["https://wa.me/".len()..].chars().all(|c| c.is_ascii_digit()));
        assert!(!link.contains(' '));
        assert!(!query.contains('&'));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            "Halo Dr. Rahmat, layar mati & bunyi!"
        );
    }

    #[test]
    fn test_message_link_encodes_non_ascii() {
        let link = message_link("62811", "Bd. Yuli é").unwrap();
        assert!(link.is_ascii());
        assert!(link.ends_with("?text=Bd.%20Yuli%20%C3%A9"));
    }

    #[test]
    fn test_message_link_rejects_non_digit_numbers() {
        assert!(matches!(message_link("", "x"), Err(AppError::Validation(_))));
        assert!(matches!(message_link("+15550100", "x"), Err(AppError::Validation(_))));
        assert!(matches!(message_link("62-811", "x"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_report_message() {
        assert_eq!(
            report_message("Dr. Rahmat", "Patient Monitor", "IGD", "screen blank"),
            "Halo Dr. Rahmat, terkait laporan kerusakan Patient Monitor di ruangan IGD: screen blank"
        );
    }
}
