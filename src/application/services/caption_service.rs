use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::ChatClient;

/// Sentinel caption recorded when an image cannot be described.
pub const CAPTION_UNAVAILABLE: &str = "No description available.";

/// Captions every image in the report gallery through the vision model.
///
/// Failure semantics differ from the rest of the pipeline on purpose: a
/// single image that cannot be read, submitted, or parsed degrades to
/// [`CAPTION_UNAVAILABLE`] and the batch continues. Only an unreadable
/// gallery directory is fatal.
pub struct CaptionService<C>
where
    C: ChatClient,
{
    chat: Arc<C>,
    prompt: String,
}

impl<C> CaptionService<C>
where
    C: ChatClient,
{
    pub fn new(chat: Arc<C>, prompt: String) -> Self {
        Self { chat, prompt }
    }

    pub async fn caption_directory(
        &self,
        dir: &Path,
    ) -> Result<BTreeMap<String, String>, CaptionServiceError> {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| CaptionServiceError::DirectoryUnreadable {
                dir: dir.display().to_string(),
                source: e,
            })?;

        let mut image_paths = Vec::new();
        while let Some(entry) =
            entries
                .next_entry()
                .await
                .map_err(|e| CaptionServiceError::DirectoryUnreadable {
                    dir: dir.display().to_string(),
                    source: e,
                })?
        {
            let path = entry.path();
            if mime_for_extension(&path).is_some() {
                image_paths.push(path);
            }
        }
        image_paths.sort();

        let mut captions = BTreeMap::new();
        for path in image_paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let caption = self.caption_one(&path).await;
            captions.insert(name, caption);
        }

        Ok(captions)
    }

    async fn caption_one(&self, path: &Path) -> String {
        let mime = mime_for_extension(path).expect("only image paths reach here");

        let image_data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Image unreadable, using sentinel caption");
                return CAPTION_UNAVAILABLE.to_string();
            }
        };

        match self
            .chat
            .describe_image(&self.prompt, &image_data, mime)
            .await
        {
            Ok(caption) => caption,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Captioning failed, using sentinel caption");
                CAPTION_UNAVAILABLE.to_string()
            }
        }
    }
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase()
        .as_str()
    {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionServiceError {
    #[error("gallery directory {dir} unreadable: {source}")]
    DirectoryUnreadable {
        dir: String,
        source: std::io::Error,
    },
}
