use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use fitscore::config::Settings;
use fitscore::core::{presets, validate_preset, Matcher};
use fitscore::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings);

    info!("Starting FitScore service...");

    // Registry self-check: every preset must sum to 1.0
    let invalid: Vec<&str> = presets()
        .iter()
        .map(|p| p.name)
        .filter(|name| !validate_preset(name))
        .collect();
    if !invalid.is_empty() {
        error!("Invalid weighting presets: {}", invalid.join(", "));
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "weighting presets failed validation",
        ));
    }

    info!("Validated {} weighting presets", presets().len());

    let matcher = Matcher::new(settings.matching.default_limit);

    let app_state = AppState {
        matcher,
        max_limit: settings.matching.max_limit,
        default_preset: settings.scoring.default_preset.clone(),
    };

    info!(
        "Matcher initialized (default limit: {}, max limit: {}, default preset: {})",
        settings.matching.default_limit, settings.matching.max_limit, settings.scoring.default_preset
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_app)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
