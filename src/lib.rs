pub mod languages;
pub mod logging;
pub mod provider;
pub mod server;
pub mod settings;
pub mod translator;

pub use provider::{Gemini, TextModel, UpstreamError};
pub use translator::{TranslationRequest, TranslationResult, Translator};
