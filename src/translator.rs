use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::provider::{TextModel, UpstreamError};

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    pub translated_text: String,
    #[serde(rename = "hinglish_text")]
    pub pronunciation_text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Runs the two-step translate-then-romanize pipeline against a text model.
///
/// The two upstream calls are sequential and dependent; there is no retry
/// and no partial result. Either both texts come back non-empty or the
/// whole translation fails.
#[derive(Clone)]
pub struct Translator {
    model: Arc<dyn TextModel>,
}

impl Translator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, UpstreamError> {
        let prompt = translation_prompt(
            &request.source_language,
            &request.target_language,
            &request.text,
        );
        debug!("translation prompt: {}", prompt);
        let translated_text = self.model.generate(prompt).await?;

        let prompt = pronunciation_prompt(&request.target_language, &translated_text);
        debug!("pronunciation prompt: {}", prompt);
        let pronunciation_text = self.model.generate(prompt).await?;

        Ok(TranslationResult {
            translated_text,
            pronunciation_text,
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
        })
    }
}

/// Instruction for the first upstream call: translation only, no commentary.
pub fn translation_prompt(source_language: &str, target_language: &str, text: &str) -> String {
    format!(
        "Translate the following text from {} to {}. \
         Only provide the translation without any additional text or explanations: {}",
        source_language, target_language, text
    )
}

/// Instruction for the second upstream call: romanize the translated text.
///
/// Hindi targets get a Hinglish blend instead of plain romanization. The
/// exact phrasing is a product choice, not a contract; keep it here so it
/// stays a one-line edit.
pub fn pronunciation_prompt(target_language: &str, translated_text: &str) -> String {
    if target_language.trim().eq_ignore_ascii_case("hindi") {
        format!(
            "For the following Hindi text, provide a Hinglish version \
             (a natural mix of Hindi and English written in Latin script).\n\
             Make it easy to read and understand.\n\
             Text: {}",
            translated_text
        )
    } else {
        format!(
            "For the following text in {}, provide the pronunciation in \
             English script (romanization).\n\
             Make it easy to read and understand.\n\
             Text: {}",
            target_language, translated_text
        )
    }
}
