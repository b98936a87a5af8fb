//! Translation capability and its application to catalog values.
//!
//! - `backend`: the `Translator` trait every backend implements
//! - `openai`: the default backend (OpenAI-compatible chat completions)
//! - `value`: recursive leaf-by-leaf translation with explicit outcomes

mod backend;
mod openai;
mod value;

pub use backend::Translator;
pub use openai::OpenAiTranslator;
pub use value::{LeafOutcome, TranslationReport, ValueTranslator};
