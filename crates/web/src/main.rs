use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::{AppState, BallotPolicy};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::players::handlers::list_players,
        features::participation::handlers::get_participation,
        features::participation::handlers::submit_participation,
        features::match_day::handlers::get_match_day,
        features::match_day::handlers::submit_match_day_vote,
        features::all_star::handlers::get_all_star,
        features::all_star::handlers::submit_all_star_ballot,
        features::draws::handlers::list_draws,
        features::draws::handlers::create_draw,
        features::draws::handlers::get_draw,
    ),
    components(
        schemas(
            storage::dto::common::ErrorResponse,
            storage::dto::player::RosterResponse,
            storage::dto::participation::SubmitParticipationRequest,
            storage::dto::participation::ParticipationRecordResponse,
            storage::dto::participation::ParticipationAggregates,
            storage::dto::participation::ParticipationOverviewResponse,
            storage::dto::participation::SubmitParticipationResponse,
            storage::dto::match_day::SubmitMatchDayVoteRequest,
            storage::dto::match_day::MatchDayVoteSummary,
            storage::dto::match_day::DayCount,
            storage::dto::match_day::MatchDayResults,
            storage::dto::match_day::MatchDayOverviewResponse,
            storage::dto::match_day::SubmitMatchDayVoteResponse,
            storage::dto::all_star::SubmitAllStarBallotRequest,
            storage::dto::all_star::AllStarBallotSummary,
            storage::dto::all_star::AllStarEntry,
            storage::dto::all_star::AllStarResults,
            storage::dto::all_star::AllStarOverviewResponse,
            storage::dto::all_star::SubmitAllStarBallotResponse,
            storage::dto::draw::CreateDrawRequest,
            storage::dto::draw::DrawRecord,
            storage::dto::draw::CreateDrawResponse,
            storage::dto::draw::DrawHistoryResponse,
            storage::models::Player,
            storage::models::ParticipationChoice,
            storage::models::MatchDay,
        )
    ),
    tags(
        (name = "players", description = "Team roster"),
        (name = "participation", description = "Weekly participation answers"),
        (name = "match-day", description = "Match day voting"),
        (name = "all-star", description = "All-star ballots"),
        (name = "draws", description = "Random squad draws"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting squad API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    if config.allow_all_star_self_vote {
        tracing::warn!("All-star voters may pick themselves");
    }

    let state = AppState {
        db,
        ballot_policy: BallotPolicy {
            allow_self_vote: config.allow_all_star_self_vote,
        },
    };

    let app = routes::app(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
