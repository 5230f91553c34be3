mod gemini;
mod provider;

pub use gemini::GeminiProvider;
pub use provider::*;
