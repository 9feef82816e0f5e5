mod prompt_library;

pub use prompt_library::{PromptLibrary, ResourceError};
