use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use atelier_cli::{
    commands, CliDocType, CliEmojis, CliGoal, CliLength, CliPlatform, CliRatio, CliStyle, CliTone,
};
use atelier_client::Endpoints;
use atelier_core::{DocumentRequest, ImageRequest, PostRequest};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a social media post
    Post {
        /// What the post should say
        task: String,
        #[arg(long, value_enum, default_value_t = CliPlatform::Telegram)]
        platform: CliPlatform,
        #[arg(long, value_enum, default_value_t = CliTone::Brand)]
        tone: CliTone,
        #[arg(long, value_enum, default_value_t = CliGoal::Engagement)]
        goal: CliGoal,
        #[arg(long, value_enum, default_value_t = CliLength::Medium)]
        length: CliLength,
        #[arg(long, value_enum, default_value_t = CliEmojis::Balanced)]
        emojis: CliEmojis,
    },
    /// Generate an image and optionally download it
    Image {
        /// What the image should show
        task: String,
        #[arg(long, value_enum, default_value_t = CliStyle::Photorealism)]
        style: CliStyle,
        #[arg(long, value_enum, default_value_t = CliRatio::Square)]
        ratio: CliRatio,
        #[arg(short, long, help = "Download the image to this path")]
        output: Option<PathBuf>,
    },
    /// Generate a document outline (phase one of the document flow)
    Topics {
        subject: String,
        #[arg(long = "type", value_enum, default_value_t = CliDocType::Essay)]
        doc_type: CliDocType,
        #[arg(long, default_value_t = 10)]
        pages: i64,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(short, long, help = "Write the outline JSON here for hand-editing")]
        output: Option<PathBuf>,
    },
    /// Write the document from an (optionally edited) outline file
    Document {
        subject: String,
        #[arg(long, help = "Outline JSON produced by `topics`")]
        outline: PathBuf,
        #[arg(long = "type", value_enum, default_value_t = CliDocType::Essay)]
        doc_type: CliDocType,
        #[arg(long, default_value_t = 10)]
        pages: i64,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(short, long, help = "Write the document text here instead of stdout")]
        output: Option<PathBuf>,
    },
}

fn document_request(doc_type: CliDocType, subject: String, pages: i64, notes: String) -> DocumentRequest {
    let mut req = DocumentRequest {
        doc_type: doc_type.into(),
        subject,
        additional_info: notes,
        ..Default::default()
    };
    req.set_pages(pages);
    req
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let endpoints = Endpoints::default();

    match cli.command {
        Commands::Post {
            task,
            platform,
            tone,
            goal,
            length,
            emojis,
        } => {
            let req = PostRequest {
                platform: platform.into(),
                task,
                tone: tone.into(),
                goal: goal.into(),
                length: length.into(),
                emojis: emojis.into(),
            };
            commands::cmd_post(endpoints, req).await?;
        }
        Commands::Image {
            task,
            style,
            ratio,
            output,
        } => {
            let req = ImageRequest {
                task,
                style: style.into(),
                aspect_ratio: ratio.into(),
            };
            commands::cmd_image(endpoints, req, output).await?;
        }
        Commands::Topics {
            subject,
            doc_type,
            pages,
            notes,
            output,
        } => {
            let req = document_request(doc_type, subject, pages, notes);
            commands::cmd_topics(endpoints, req, output).await?;
        }
        Commands::Document {
            subject,
            outline,
            doc_type,
            pages,
            notes,
            output,
        } => {
            let req = document_request(doc_type, subject, pages, notes);
            commands::cmd_document(endpoints, req, outline, output).await?;
        }
    }

    Ok(())
}
