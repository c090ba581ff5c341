use clap::{Parser, Subcommand};
use ghibli_art_proxy::{Config, GhibliArtService};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "ghiblictl", about = "CLI for the Ghibli Art Proxy", version)]
struct Cli {
    /// Override STABILITY_API_URL
    #[arg(global = true, long)]
    stability_url: Option<String>,

    /// Override STABILITY_ENGINE_ID
    #[arg(global = true, long)]
    engine_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Restyle an existing image
    Image {
        /// Path to the source image (PNG, JPEG, WebP, ...)
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
        /// Prompt forwarded as-is; a sketch style default is used when omitted
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
        /// Output path (defaults to ./ghibli-<uuid>.png)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Generate an image from text only
    Text {
        /// Scene description; the Ghibli style suffix is appended
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
        /// Style keyword, e.g. general, anime, comic_book
        #[arg(long, default_value = "general")]
        style: String,
        /// Output path (defaults to ./ghibli-<uuid>.png)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = match Config::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("STABILITY_API_KEY must be set: {}", e);
            std::process::exit(2);
        }
    };
    if let Some(url) = cli.stability_url {
        conf.stability_url = url;
    }
    if let Some(engine) = cli.engine_id {
        conf.engine_id = engine;
    }
    let service = GhibliArtService::from_config(&conf);

    let (result, out) = match cli.command {
        Commands::Image { file, prompt, out } => {
            let bytes = tokio::fs::read(&file).await?;
            let file_name = file.file_name().and_then(|n| n.to_str()).map(str::to_string);
            let res = service.create_ghibli_art(bytes, file_name.as_deref(), prompt.as_deref()).await;
            (res, out)
        }
        Commands::Text { prompt, style, out } => {
            let res = service.create_ghibli_art_from_text(prompt.as_deref(), &style).await;
            (res, out)
        }
    };

    match result {
        Ok(png) => {
            let path = out.unwrap_or_else(|| PathBuf::from(format!("ghibli-{}.png", Uuid::new_v4())));
            tokio::fs::write(&path, &png).await?;
            println!("Saved {} ({} bytes)", path.display(), png.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
