use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use faceview::api;
use faceview::models::AppConfig;
use faceview::server;

#[derive(Parser)]
#[command(name = "faceview")]
#[command(about = "Image inspection pipeline and face-app web surface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to config.yaml (falls back to the CONFIG_FILE env var)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the inspection pipeline over one image, writing a PNG per stage
    Inspect {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the rendered stages
        #[arg(short, long, default_value = "inspect-out")]
        outdir: PathBuf,

        /// Loader strategy
        #[arg(short, long, value_enum, default_value_t = Backend::Rgb)]
        backend: Backend,
    },
}

/// Which loader strategy reads the input file.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Backend {
    /// High-level handle, converted to pixels explicitly
    Preview,
    /// Raw array, red-green-blue order
    Rgb,
    /// Raw array, blue-green-red order
    Bgr,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Faceview API",
        description = "Image inspection pipeline and face-app web surface",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_gender),
    tags(
        (name = "FaceApp", description = "Image intake for the face app")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inspect {
            input,
            outdir,
            backend,
        }) => run_inspect_command(&input, &outdir, backend),
        Some(Commands::Serve { config }) => run_server(config).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the inspection pipeline over one image (no server needed).
///
/// Load with the chosen strategy, normalize BGR input, split the channels,
/// reduce to grayscale, and render every stage into the output directory.
fn run_inspect_command(input: &Path, outdir: &Path, backend: Backend) -> anyhow::Result<()> {
    use img_inspect::{channels, loader, ColorEncoding, PngDirRenderer, Renderer};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faceview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loaded = match backend {
        Backend::Preview => {
            let handle = loader::open(input)?;
            tracing::info!(
                width = handle.width(),
                height = handle.height(),
                path = %handle.path().display(),
                "Opened image handle"
            );
            handle.into_pixels()
        }
        Backend::Rgb => loader::load_rgb(input)?,
        Backend::Bgr => loader::load_bgr(input)?,
    };

    let (height, width, channel_count) = loaded.shape();
    tracing::info!(
        height,
        width,
        channels = channel_count,
        encoding = %loaded.encoding(),
        "Loaded pixel array"
    );

    let mut renderer = PngDirRenderer::create(outdir)?;

    // BGR-native input is normalized before display; everything downstream
    // runs on the RGB array.
    let rgb = match loaded.encoding() {
        ColorEncoding::Bgr => loaded.to_rgb()?,
        _ => loaded,
    };
    renderer.show("color", &rgb)?;

    let [r, g, b] = channels::split(&rgb)?;
    for (label, plane) in [("red", r), ("green", g), ("blue", b)] {
        renderer.show(label, &plane.into_gray_image())?;
    }

    let gray = rgb.to_gray()?;
    renderer.show("gray", &gray)?;

    let (min, max) = gray
        .data()
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    tracing::info!(
        height = gray.height(),
        width = gray.width(),
        min,
        max,
        "Grayscale intensities"
    );

    println!(
        "Wrote {} images to {}",
        renderer.frames_written(),
        outdir.display()
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Faceview v{VERSION}");
    println!("Image inspection pipeline and face-app web surface\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  faceview serve     Start the HTTP server");
    println!("  faceview inspect   Render one image's inspection stages to PNG files");
    println!("\nRun 'faceview --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faceview=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        config_path.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = Arc::new(AppConfig::load(config_path.as_deref()));
    let bind_addr = config.effective_bind_addr();

    let state = server::create_app_state(config);

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Faceview server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
