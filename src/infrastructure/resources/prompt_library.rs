use std::path::Path;

use crate::domain::SynonymDictionary;

/// Instruction templates and the synonym dictionary, loaded once from the
/// prompt resource directory. A missing resource is a fatal input error.
pub struct PromptLibrary {
    summary_instruction: String,
    tag_instruction: String,
    caption_prompt: String,
    synonym_dictionary: SynonymDictionary,
}

impl PromptLibrary {
    pub fn load(dir: &Path) -> Result<Self, ResourceError> {
        let summary_instruction = read_resource(dir, "summary_instruction.txt")?;
        let tag_instruction = read_resource(dir, "tag_instruction.txt")?;
        let caption_prompt = read_resource(dir, "caption_prompt.txt")?;
        let synonym_entries = read_resource(dir, "synonym_dict.txt")?;

        Ok(Self {
            summary_instruction,
            tag_instruction,
            caption_prompt,
            synonym_dictionary: SynonymDictionary::from_entries(&synonym_entries),
        })
    }

    pub fn summary_instruction(&self) -> &str {
        &self.summary_instruction
    }

    pub fn tag_instruction(&self) -> &str {
        &self.tag_instruction
    }

    pub fn caption_prompt(&self) -> &str {
        &self.caption_prompt
    }

    pub fn synonym_dictionary(&self) -> &SynonymDictionary {
        &self.synonym_dictionary
    }
}

fn read_resource(dir: &Path, name: &str) -> Result<String, ResourceError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|e| ResourceError::Missing {
        path: path.display().to_string(),
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("prompt resource {path} unreadable: {source}")]
    Missing {
        path: String,
        source: std::io::Error,
    },
}
