use serde::Serialize;

/// One entry of the fixed language catalog served by `GET /languages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage { code: "en", name: "English" },
    SupportedLanguage { code: "hi", name: "Hindi" },
    SupportedLanguage { code: "bn", name: "Bengali" },
    SupportedLanguage { code: "te", name: "Telugu" },
    SupportedLanguage { code: "ta", name: "Tamil" },
    SupportedLanguage { code: "mr", name: "Marathi" },
    SupportedLanguage { code: "gu", name: "Gujarati" },
    SupportedLanguage { code: "kn", name: "Kannada" },
    SupportedLanguage { code: "ml", name: "Malayalam" },
    SupportedLanguage { code: "pa", name: "Punjabi" },
    SupportedLanguage { code: "ur", name: "Urdu" },
];

/// English plus ten Indian languages, in catalog order.
pub fn supported_languages() -> &'static [SupportedLanguage] {
    SUPPORTED_LANGUAGES
}
