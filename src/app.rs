//! Application assembly - wires adapters into handlers and routers.
//!
//! `Infrastructure` picks an adapter for each port from configuration:
//!
//! | Port | Configured | Fallback |
//! |------|------------|----------|
//! | users, games, scores, match recorder | PostgreSQL | `InMemoryStore` |
//! | aggregate cache | Redis | `InMemoryCache` |
//! | mailer | Resend | `LoggingMailer` |
//!
//! `Application` builds the command/query handlers on top of it and exposes
//! the HTTP router and the background job scheduler.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::adapters::http::{api_router, GameHandlers, UserHandlers};
use crate::adapters::postgres::{
    PostgresGameRepository, PostgresMatchRecorder, PostgresScoreRepository,
    PostgresUserRepository, MIGRATOR,
};
use crate::adapters::{
    InMemoryCache, InMemoryStore, JobScheduler, JobSchedulerConfig, LoggingMailer, RedisCache,
    ResendConfig, ResendMailer, TokioTaskDispatcher,
};
use crate::application::handlers::{
    CancelGameHandler, CreateGameHandler, CreateUserHandler, GetAverageMovesHandler,
    GetGameHandler, GetGameHistoryHandler, GetUserGamesHandler, GetUserRankingsHandler,
    GetUserScoresHandler, MakeMoveHandler, RefreshAverageMovesHandler, SendRemindersHandler,
    SendTurnEmailHandler,
};
use crate::config::{AppConfig, ConfigError, EmailConfig, JobsConfig, ServerConfig};
use crate::ports::{
    AggregateCache, CacheError, GameRepository, Mailer, MailerError, MatchRecorder,
    ScoreRepository, TaskDispatcher, UserRepository,
};

/// Errors that stop the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Cache connection failed: {0}")]
    Cache(#[from] CacheError),

    #[error("Mailer setup failed: {0}")]
    Mailer(#[from] MailerError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ════════════════════════════════════════════════════════════════════════════
// Infrastructure
// ════════════════════════════════════════════════════════════════════════════

/// One adapter per outbound port.
#[derive(Clone)]
pub struct Infrastructure {
    pub users: Arc<dyn UserRepository>,
    pub games: Arc<dyn GameRepository>,
    pub scores: Arc<dyn ScoreRepository>,
    pub recorder: Arc<dyn MatchRecorder>,
    pub cache: Arc<dyn AggregateCache>,
    pub mailer: Arc<dyn Mailer>,
}

impl Infrastructure {
    /// Process-local adapters for every port.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            users: store.clone(),
            games: store.clone(),
            scores: store.clone(),
            recorder: store,
            cache: Arc::new(InMemoryCache::new()),
            mailer: Arc::new(LoggingMailer::new()),
        }
    }

    /// Connects to whatever the configuration names and falls back to
    /// in-memory adapters for the rest.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let mut infra = Self::in_memory();

        if let Some(url) = &config.database.url {
            let pool = PgPoolOptions::new()
                .min_connections(config.database.min_connections)
                .max_connections(config.database.max_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(url)
                .await?;

            if config.database.run_migrations {
                MIGRATOR.run(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            infra.users = Arc::new(PostgresUserRepository::new(pool.clone()));
            infra.games = Arc::new(PostgresGameRepository::new(pool.clone()));
            infra.scores = Arc::new(PostgresScoreRepository::new(pool.clone()));
            infra.recorder = Arc::new(PostgresMatchRecorder::new(pool));
            tracing::info!("Using PostgreSQL storage");
        } else {
            tracing::warn!("No database URL configured; data is kept in memory");
        }

        if let Some(url) = &config.redis.url {
            let mut cache = RedisCache::connect(url).await?;
            if let Some(prefix) = &config.redis.key_prefix {
                cache = cache.with_prefix(prefix.clone());
            }
            infra.cache = Arc::new(cache);
            tracing::info!("Using Redis cache");
        }

        if let Some(mailer) = resend_mailer(&config.email)? {
            infra.mailer = Arc::new(mailer);
            tracing::info!("Using Resend mailer");
        } else {
            tracing::warn!("No Resend API key configured; email is logged only");
        }

        Ok(infra)
    }
}

fn resend_mailer(config: &EmailConfig) -> Result<Option<ResendMailer>, MailerError> {
    let Some(api_key) = &config.resend_api_key else {
        return Ok(None);
    };

    let resend = ResendConfig::from_secret(api_key.clone(), config.from_header())
        .with_base_url(config.base_url.clone());
    ResendMailer::new(resend).map(Some)
}

// ════════════════════════════════════════════════════════════════════════════
// Application
// ════════════════════════════════════════════════════════════════════════════

/// Handlers wired to one set of adapters.
pub struct Application {
    infra: Infrastructure,
    dispatcher: Arc<dyn TaskDispatcher>,
}

impl Application {
    /// Turn emails run on the Tokio runtime of the caller.
    pub fn new(infra: Infrastructure) -> Self {
        let turn_email = Arc::new(SendTurnEmailHandler::new(
            infra.users.clone(),
            infra.games.clone(),
            infra.mailer.clone(),
        ));
        let dispatcher = Arc::new(TokioTaskDispatcher::new(turn_email));
        Self::with_dispatcher(infra, dispatcher)
    }

    pub fn with_dispatcher(infra: Infrastructure, dispatcher: Arc<dyn TaskDispatcher>) -> Self {
        Self { infra, dispatcher }
    }

    pub fn infrastructure(&self) -> &Infrastructure {
        &self.infra
    }

    pub fn game_handlers(&self) -> GameHandlers {
        let infra = &self.infra;
        GameHandlers::new(
            Arc::new(CreateGameHandler::new(infra.users.clone(), infra.games.clone())),
            Arc::new(GetGameHandler::new(infra.users.clone(), infra.games.clone())),
            Arc::new(MakeMoveHandler::new(
                infra.users.clone(),
                infra.games.clone(),
                infra.recorder.clone(),
                self.dispatcher.clone(),
            )),
            Arc::new(CancelGameHandler::new(infra.games.clone())),
            Arc::new(GetGameHistoryHandler::new(infra.games.clone())),
            Arc::new(GetAverageMovesHandler::new(infra.cache.clone())),
        )
    }

    pub fn user_handlers(&self) -> UserHandlers {
        let infra = &self.infra;
        UserHandlers::new(
            Arc::new(CreateUserHandler::new(infra.users.clone())),
            Arc::new(GetUserRankingsHandler::new(infra.users.clone())),
            Arc::new(GetUserGamesHandler::new(infra.users.clone(), infra.games.clone())),
            Arc::new(GetUserScoresHandler::new(infra.users.clone(), infra.scores.clone())),
        )
    }

    /// API routes without middleware.
    pub fn router(&self) -> Router {
        api_router(self.game_handlers(), self.user_handlers())
    }

    pub fn scheduler(&self, config: &JobsConfig) -> JobScheduler {
        let infra = &self.infra;
        JobScheduler::new(
            Arc::new(SendRemindersHandler::new(
                infra.users.clone(),
                infra.games.clone(),
                infra.mailer.clone(),
            )),
            Arc::new(RefreshAverageMovesHandler::new(
                infra.games.clone(),
                infra.cache.clone(),
            )),
            JobSchedulerConfig::default()
                .with_reminder_interval(config.reminder_interval())
                .with_average_refresh_interval(config.average_refresh_interval()),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP middleware and tracing
// ════════════════════════════════════════════════════════════════════════════

/// Adds request tracing, CORS and the request timeout.
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if config.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter. Production logs are JSON.
pub fn init_tracing(config: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
