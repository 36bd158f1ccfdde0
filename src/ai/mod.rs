pub mod advisor;
pub mod fallback;
pub mod prompt;

pub use advisor::{Advice, AdviceSource, FitnessAdvisor, GeminiGenerator, TextGenerator};
pub use fallback::{Category, FallbackTable};
