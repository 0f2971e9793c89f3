use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};
use indicatif::{ProgressBar, ProgressStyle};

use atelier_client::{default_http_client, Endpoints, GenerationClient};
use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicOutline};

fn client(endpoints: Endpoints) -> Result<GenerationClient> {
    let http = default_http_client().context("Failed to build HTTP client")?;
    Ok(GenerationClient::new(http, endpoints))
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn cmd_post(endpoints: Endpoints, req: PostRequest) -> Result<String> {
    if let Err(e) = req.validate() {
        anyhow::bail!("{e}");
    }

    println!(":: Generating post");
    println!("   Platform: {}", req.platform.label());
    println!("   Tone:     {}", req.tone.label());

    let pb = spinner("Waiting for the model...");
    let result = client(endpoints)?.generate_post(&req).await;
    pb.finish_and_clear();

    let text = result.context("Post generation failed")?;
    println!("\n{text}");
    Ok(text)
}

pub async fn cmd_image(
    endpoints: Endpoints,
    req: ImageRequest,
    output: Option<PathBuf>,
) -> Result<String> {
    if let Err(e) = req.validate() {
        anyhow::bail!("{e}");
    }

    let (w, h) = req.aspect_ratio.dimensions();
    println!(":: Generating image");
    println!("   Style:  {}", req.style.label());
    println!("   Format: {w}x{h}");

    let client = client(endpoints)?;
    let pb = spinner("Waiting for the model...");
    let result = client.generate_image(&req).await;
    pb.finish_and_clear();

    let url = result.context("Image generation failed")?;
    println!("   URL: {url}");

    if let Some(path) = output {
        let pb = spinner("Downloading image...");
        let bytes = client.fetch_image_bytes(&url).await;
        pb.finish_and_clear();

        let bytes = bytes.context("Image download failed")?;
        std::fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            ":: Saved {} ({})",
            path.display(),
            format_size(bytes.len() as u64, DECIMAL)
        );
    }

    Ok(url)
}

pub async fn cmd_topics(
    endpoints: Endpoints,
    req: DocumentRequest,
    output: Option<PathBuf>,
) -> Result<TopicOutline> {
    if let Err(e) = req.validate() {
        anyhow::bail!("{e}");
    }

    println!(":: Generating outline");
    println!("   Type:    {}", req.doc_type.label());
    println!("   Subject: {}", req.subject.trim());
    println!("   Pages:   {}", req.pages);

    let pb = spinner("Waiting for the model...");
    let result = client(endpoints)?.generate_topics(&req).await;
    pb.finish_and_clear();

    let outline = TopicOutline::new(result.context("Outline generation failed")?);
    let json = serde_json::to_string_pretty(&outline)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                ":: Saved outline to {} ({} sections); edit it, then run `document`",
                path.display(),
                outline.len()
            );
        }
        None => println!("{json}"),
    }

    Ok(outline)
}

pub async fn cmd_document(
    endpoints: Endpoints,
    req: DocumentRequest,
    outline_path: PathBuf,
    output: Option<PathBuf>,
) -> Result<String> {
    if let Err(e) = req.validate() {
        anyhow::bail!("{e}");
    }

    let content = std::fs::read_to_string(&outline_path)
        .with_context(|| format!("Failed to read {}", outline_path.display()))?;
    let outline: TopicOutline =
        serde_json::from_str(&content).context("Outline file is not valid outline JSON")?;
    if let Err(e) = outline.validate() {
        anyhow::bail!("{e}");
    }

    println!(":: Generating document");
    println!("   Type:     {}", req.doc_type.label());
    println!("   Subject:  {}", req.subject.trim());
    println!("   Sections: {}", outline.len());

    let pb = spinner("Waiting for the model (this can take a while)...");
    let result = client(endpoints)?.generate_document(&req, &outline).await;
    pb.finish_and_clear();

    let text = result.context("Document generation failed")?;

    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                ":: Saved {} ({} characters)",
                path.display(),
                text.chars().count()
            );
        }
        None => println!("\n{text}"),
    }

    Ok(text)
}
