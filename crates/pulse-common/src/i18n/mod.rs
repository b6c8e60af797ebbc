//! Localized user-facing messages
//!
//! A small static catalog for the handful of messages this service surfaces
//! directly (the 403 not-activated response). Falls back to en-us for
//! unknown locales and to the key itself for unknown keys.

/// Message keys with translations per supported locale
const CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "reactions.notActivated",
        &[
            ("en-us", "You must activate this content before viewing its reactions."),
            ("es-mx", "Debes activar este contenido antes de ver sus reacciones."),
            ("fr-fr", "Vous devez activer ce contenu avant de voir ses r\u{e9}actions."),
        ],
    ),
    (
        "user.dataDeleted",
        &[
            ("en-us", "All reaction data for this user has been removed."),
            ("es-mx", "Se han eliminado todos los datos de reacciones de este usuario."),
            ("fr-fr", "Toutes les donn\u{e9}es de r\u{e9}action de cet utilisateur ont \u{e9}t\u{e9} supprim\u{e9}es."),
        ],
    ),
];

const DEFAULT_LOCALE: &str = "en-us";

/// Resolve a message key for a locale.
///
/// Unknown locales fall back to en-us; unknown keys echo the key so a
/// missing translation is visible rather than a panic or an empty string.
#[must_use]
pub fn translate(locale: &str, key: &str) -> String {
    let locale = locale.to_lowercase();
    let Some((_, translations)) = CATALOG.iter().find(|(k, _)| *k == key) else {
        return key.to_string();
    };

    translations
        .iter()
        .find(|(l, _)| *l == locale)
        .or_else(|| translations.iter().find(|(l, _)| *l == DEFAULT_LOCALE))
        .map_or_else(|| key.to_string(), |(_, msg)| (*msg).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_and_locale() {
        let msg = translate("es-mx", "reactions.notActivated");
        assert!(msg.starts_with("Debes activar"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let msg = translate("de-de", "reactions.notActivated");
        assert!(msg.starts_with("You must activate"));
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        assert_eq!(translate("en-us", "nope.missing"), "nope.missing");
    }

    #[test]
    fn test_locale_is_case_insensitive() {
        let msg = translate("EN-US", "reactions.notActivated");
        assert!(msg.starts_with("You must activate"));
    }
}
