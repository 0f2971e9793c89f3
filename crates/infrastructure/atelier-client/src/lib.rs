pub mod error;
pub mod wire;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicEntry, TopicOutline};

pub use error::GenerationError;

/// Fixed endpoint identity per generation kind. Topics and document share
/// `document_url`, discriminated by the request's `mode` field.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub post_url: String,
    pub image_url: String,
    pub document_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            post_url: env_or(
                atelier_config::POST_ENDPOINT_ENV,
                atelier_config::DEFAULT_POST_ENDPOINT,
            ),
            image_url: env_or(
                atelier_config::IMAGE_ENDPOINT_ENV,
                atelier_config::DEFAULT_IMAGE_ENDPOINT,
            ),
            document_url: env_or(
                atelier_config::DOCUMENT_ENDPOINT_ENV,
                atelier_config::DEFAULT_DOCUMENT_ENDPOINT,
            ),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Shared HTTP client with the generation timeout applied.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(atelier_config::REQUEST_TIMEOUT_SECS))
        .build()
}

/// One outbound request per user-triggered action; no retries, no streaming.
pub struct GenerationClient {
    client: Client,
    endpoints: Endpoints,
}

impl GenerationClient {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn generate_post(&self, req: &PostRequest) -> Result<String, GenerationError> {
        let body = wire::PostBody {
            platform: req.platform,
            task: req.task.trim(),
            tone: req.tone,
            goal: req.goal,
            length: req.length,
            emojis: req.emojis,
        };
        let reply: wire::PostReply = self.post_json(&self.endpoints.post_url, &body).await?;
        reply.post.ok_or(GenerationError::MissingField("post"))
    }

    pub async fn generate_image(&self, req: &ImageRequest) -> Result<String, GenerationError> {
        let body = wire::ImageBody {
            task: req.task.trim(),
            style: req.style,
            aspect_ratio: req.aspect_ratio,
        };
        let reply: wire::ImageReply = self.post_json(&self.endpoints.image_url, &body).await?;
        reply
            .image_url
            .ok_or(GenerationError::MissingField("imageUrl"))
    }

    pub async fn generate_topics(
        &self,
        req: &DocumentRequest,
    ) -> Result<Vec<TopicEntry>, GenerationError> {
        let body = wire::TopicsBody {
            mode: "topics",
            doc_type: req.doc_type,
            subject: req.subject.trim(),
            pages: req.pages,
            additional_info: req.additional_info.trim(),
        };
        let reply: wire::TopicsReply = self.post_json(&self.endpoints.document_url, &body).await?;
        reply.topics.ok_or(GenerationError::MissingField("topics"))
    }

    pub async fn generate_document(
        &self,
        req: &DocumentRequest,
        outline: &TopicOutline,
    ) -> Result<String, GenerationError> {
        let body = wire::DocumentBody {
            mode: "document",
            doc_type: req.doc_type,
            subject: req.subject.trim(),
            pages: req.pages,
            topics: outline.entries(),
            additional_info: req.additional_info.trim(),
        };
        let reply: wire::DocumentReply =
            self.post_json(&self.endpoints.document_url, &body).await?;
        reply
            .document
            .ok_or(GenerationError::MissingField("document"))
    }

    /// Downloads save the image bytes, not the URL, so the remote image is
    /// fetched again here.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, GenerationError> {
        debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        debug!("<- {} {url}", status.as_u16());
        if !status.is_success() {
            return Err(GenerationError::Status(status));
        }
        let text = response.text().await?;
        Ok(serde_json::from_str::<T>(&text)?)
    }
}
