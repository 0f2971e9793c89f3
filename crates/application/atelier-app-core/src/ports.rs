use async_trait::async_trait;

use atelier_client::{GenerationClient, GenerationError};
use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicEntry, TopicOutline};

/// Seam between the application and the remote generation endpoints. Tests
/// substitute a scripted implementation.
#[async_trait]
pub trait GenerationPort: Send + Sync + 'static {
    async fn generate_post(&self, req: &PostRequest) -> Result<String, GenerationError>;
    async fn generate_image(&self, req: &ImageRequest) -> Result<String, GenerationError>;
    async fn generate_topics(&self, req: &DocumentRequest)
        -> Result<Vec<TopicEntry>, GenerationError>;
    async fn generate_document(
        &self,
        req: &DocumentRequest,
        outline: &TopicOutline,
    ) -> Result<String, GenerationError>;
    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, GenerationError>;
}

#[async_trait]
impl GenerationPort for GenerationClient {
    async fn generate_post(&self, req: &PostRequest) -> Result<String, GenerationError> {
        GenerationClient::generate_post(self, req).await
    }

    async fn generate_image(&self, req: &ImageRequest) -> Result<String, GenerationError> {
        GenerationClient::generate_image(self, req).await
    }

    async fn generate_topics(
        &self,
        req: &DocumentRequest,
    ) -> Result<Vec<TopicEntry>, GenerationError> {
        GenerationClient::generate_topics(self, req).await
    }

    async fn generate_document(
        &self,
        req: &DocumentRequest,
        outline: &TopicOutline,
    ) -> Result<String, GenerationError> {
        GenerationClient::generate_document(self, req, outline).await
    }

    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        GenerationClient::fetch_image_bytes(self, url).await
    }
}
