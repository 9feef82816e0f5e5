use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use briefing::application::ports::{ChatClient, ChatClientError};
use briefing::application::services::{CaptionService, CaptionServiceError, CAPTION_UNAVAILABLE};

/// Vision double that fails for file contents containing "broken" and
/// otherwise echoes a caption derived from the payload.
struct SelectiveVision {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl ChatClient for SelectiveVision {
    async fn complete_json(
        &self,
        _instruction: &str,
        _prompt: &str,
    ) -> Result<String, ChatClientError> {
        unimplemented!("not used by captioning")
    }

    async fn describe_image(
        &self,
        _prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String, ChatClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if image_data.windows(6).any(|w| w == b"broken") {
            return Err(ChatClientError::InvalidResponse(
                "no choices in response".to_string(),
            ));
        }
        Ok(format!("caption of a {mime_type} image"))
    }
}

#[tokio::test]
async fn given_one_failing_image_when_captioning_then_sentinel_is_used_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_broken.png"), b"broken bytes").unwrap();
    std::fs::write(dir.path().join("b_fine.jpg"), b"fine bytes").unwrap();

    let vision = Arc::new(SelectiveVision {
        calls: AtomicUsize::new(0),
    });
    let service = CaptionService::new(Arc::clone(&vision), "describe".to_string());

    let captions = service.caption_directory(dir.path()).await.unwrap();

    assert_eq!(captions.len(), 2);
    assert_eq!(captions["a_broken.png"], CAPTION_UNAVAILABLE);
    assert_eq!(captions["b_fine.jpg"], "caption of a image/jpeg image");
    assert_eq!(vision.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_non_image_files_when_captioning_then_they_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("chart.png"), b"fine bytes").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

    let vision = Arc::new(SelectiveVision {
        calls: AtomicUsize::new(0),
    });
    let service = CaptionService::new(Arc::clone(&vision), "describe".to_string());

    let captions = service.caption_directory(dir.path()).await.unwrap();

    assert_eq!(captions.len(), 1);
    assert!(captions.contains_key("chart.png"));
}

#[tokio::test]
async fn given_missing_gallery_directory_when_captioning_then_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let vision = Arc::new(SelectiveVision {
        calls: AtomicUsize::new(0),
    });
    let service = CaptionService::new(vision, "describe".to_string());

    let result = service.caption_directory(&dir.path().join("missing")).await;

    assert!(matches!(
        result,
        Err(CaptionServiceError::DirectoryUnreadable { .. })
    ));
}
