use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ogpk::image::preview_image;
use ogpk::ogp::{fetch_open_graph, normalize_url};
use ogpk::ui::{render_json, render_text};
use ogpk::ViewerConfig;

#[derive(Parser, Debug)]
#[command(name = "ogpk", author, version, about, long_about = None)]
struct Args {
    /// Show og:image in the terminal
    #[arg(short, long)]
    preview: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Page to inspect; http:// is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Anything after the URL; its presence means the invocation is malformed.
    #[arg(hide = true)]
    extra: Vec<String>,
}

impl Args {
    /// The single URL to inspect, or `None` when usage should be shown.
    fn target(&self) -> Option<&str> {
        match (&self.url, self.extra.is_empty()) {
            (Some(url), true) => Some(url.as_str()),
            _ => None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ogpk=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(url) = args.target() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match run(url, args.preview, args.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "ogpk failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str, preview: bool, json: bool) -> ogpk::Result<()> {
    let client = reqwest::Client::new();
    let og_data = fetch_open_graph(&client, &normalize_url(url)).await?;

    if json {
        println!("{}", render_json(&og_data)?);
    } else {
        print!("{}", render_text(&og_data));
    }

    if preview {
        if let Some(image_url) = og_data.get("og:image") {
            preview_image(&client, image_url, &ViewerConfig::default()).await?;
        }
    }

    Ok(())
}

fn print_usage() {
    let mut cmd = Args::command();
    println!("{}", cmd.render_help());
    println!("Version {}", env!("CARGO_PKG_VERSION"));
}
