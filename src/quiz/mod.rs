pub mod prompts;

pub use prompts::PromptDeck;
