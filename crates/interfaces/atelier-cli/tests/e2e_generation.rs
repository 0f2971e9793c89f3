use std::net::SocketAddr;

use axum::{body::Body, routing::get, routing::post, Router};
use tempfile::tempdir;

use atelier_cli::commands;
use atelier_client::Endpoints;
use atelier_core::{DocumentRequest, ImageRequest, PostRequest, TopicOutline};

async fn start_mock_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route(
            "/post",
            post(|body: String| async move {
                assert!(body.contains("\"tone\":\"anya_vibe\""));
                Body::from(r#"{"post":"☕ Утро начинается с кофе!"}"#)
            }),
        )
        .route(
            "/image",
            post(move || async move {
                Body::from(format!(
                    r#"{{"imageUrl":"http://{addr}/cdn/image.png"}}"#
                ))
            }),
        )
        .route(
            "/document",
            post(|body: String| async move {
                if body.contains("\"mode\":\"topics\"") {
                    Body::from(
                        r#"{"topics":[{"title":"Введение","description":"Контекст и цели"}]}"#,
                    )
                } else {
                    assert!(body.contains("\"mode\":\"document\""));
                    assert!(body.contains("\"title\":\"Введение (правка)\""));
                    Body::from(r#"{"document":"ВВЕДЕНИЕ\nПолный текст."}"#)
                }
            }),
        )
        .route(
            "/cdn/image.png",
            get(|| async { Body::from(vec![0x89u8, b'P', b'N', b'G']) }),
        );

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn endpoints_for(addr: SocketAddr) -> Endpoints {
    let base = format!("http://{addr}");
    Endpoints {
        post_url: format!("{base}/post"),
        image_url: format!("{base}/image"),
        document_url: format!("{base}/document"),
    }
}

#[tokio::test]
async fn post_generation_round_trip() {
    let (addr, server) = start_mock_server().await;

    let req = PostRequest {
        task: "Напиши пост про утренний кофе".into(),
        ..Default::default()
    };
    let text = commands::cmd_post(endpoints_for(addr), req)
        .await
        .expect("post generation");
    assert_eq!(text, "☕ Утро начинается с кофе!");

    server.abort();
}

#[tokio::test]
async fn whitespace_task_fails_before_any_request() {
    // Deliberately unreachable endpoints: validation must fire first.
    let endpoints = Endpoints {
        post_url: "http://127.0.0.1:1/post".into(),
        image_url: "http://127.0.0.1:1/image".into(),
        document_url: "http://127.0.0.1:1/document".into(),
    };

    let req = PostRequest {
        task: "   ".into(),
        ..Default::default()
    };
    let err = commands::cmd_post(endpoints, req)
        .await
        .expect_err("blank task must fail");
    assert_eq!(err.to_string(), "Describe what you want the post to say");
}

#[tokio::test]
async fn image_generation_downloads_raw_bytes() {
    let (addr, server) = start_mock_server().await;
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("picture.png");

    let req = ImageRequest {
        task: "кот в очках".into(),
        ..Default::default()
    };
    let url = commands::cmd_image(endpoints_for(addr), req, Some(out.clone()))
        .await
        .expect("image generation");
    assert_eq!(url, format!("http://{addr}/cdn/image.png"));
    assert_eq!(
        std::fs::read(&out).expect("read"),
        vec![0x89u8, b'P', b'N', b'G']
    );

    server.abort();
}

#[tokio::test]
async fn unreachable_image_endpoint_is_an_error() {
    let endpoints = Endpoints {
        post_url: "http://127.0.0.1:1/post".into(),
        image_url: "http://127.0.0.1:1/image".into(),
        document_url: "http://127.0.0.1:1/document".into(),
    };

    let req = ImageRequest {
        task: "кот в очках".into(),
        ..Default::default()
    };
    let err = commands::cmd_image(endpoints, req, None)
        .await
        .expect_err("unreachable endpoint must fail");
    assert!(err.to_string().contains("Image generation failed"));
}

#[tokio::test]
async fn two_phase_document_flow_with_hand_edited_outline() {
    let (addr, server) = start_mock_server().await;
    let dir = tempdir().expect("tempdir");
    let outline_path = dir.path().join("outline.json");

    let req = DocumentRequest {
        subject: "История Рима".into(),
        ..Default::default()
    };

    let outline = commands::cmd_topics(
        endpoints_for(addr),
        req.clone(),
        Some(outline_path.clone()),
    )
    .await
    .expect("topics generation");
    assert_eq!(outline.len(), 1);

    // Hand-edit the outline file between the two phases.
    let mut edited: TopicOutline =
        serde_json::from_str(&std::fs::read_to_string(&outline_path).expect("read outline"))
            .expect("parse outline");
    edited.update(
        0,
        atelier_core::TopicField::Title,
        "Введение (правка)".into(),
    );
    std::fs::write(
        &outline_path,
        serde_json::to_string_pretty(&edited).expect("serialize"),
    )
    .expect("rewrite outline");

    let doc_path = dir.path().join("doc.txt");
    let text = commands::cmd_document(
        endpoints_for(addr),
        req,
        outline_path,
        Some(doc_path.clone()),
    )
    .await
    .expect("document generation");

    assert_eq!(text, "ВВЕДЕНИЕ\nПолный текст.");
    assert_eq!(
        std::fs::read_to_string(&doc_path).expect("read document"),
        "ВВЕДЕНИЕ\nПолный текст."
    );

    server.abort();
}

#[tokio::test]
async fn empty_outline_file_is_rejected() {
    let (addr, server) = start_mock_server().await;
    let dir = tempdir().expect("tempdir");
    let outline_path = dir.path().join("outline.json");
    std::fs::write(&outline_path, "[]").expect("write empty outline");

    let req = DocumentRequest {
        subject: "История Рима".into(),
        ..Default::default()
    };
    let err = commands::cmd_document(endpoints_for(addr), req, outline_path, None)
        .await
        .expect_err("empty outline must fail");
    assert_eq!(
        err.to_string(),
        "Generate topics before writing the document"
    );

    server.abort();
}
