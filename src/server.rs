//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, outbound-client selection, and
//! the Axum server lifecycle.

use crate::application::services::{
    AuthService, ClubService, DomainService, JwtCodec, NotificationService, StudentService,
    TestService,
};
use crate::config::Config;
use crate::infrastructure::email::{EmailClient, HttpEmailClient, NullEmailClient};
use crate::infrastructure::oauth::{DisabledOAuth, GoogleOAuth, OAuthProvider};
use crate::infrastructure::persistence::{
    PgClubRepository, PgDomainRepository, PgSessionCodeRepository, PgStudentRepository,
    PgTestRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (sized from config)
/// - Migrations
/// - Email client (or NullEmailClient fallback)
/// - OAuth provider (or disabled fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let email: Arc<dyn EmailClient> = match &config.email {
        Some(settings) => {
            tracing::info!("Email delivery enabled");
            Arc::new(HttpEmailClient::new(
                settings.api_base_url.clone(),
                settings.api_token.clone(),
                settings.sender.clone(),
                settings.region.clone(),
            ))
        }
        None => {
            tracing::info!("Email delivery disabled (NullEmailClient)");
            Arc::new(NullEmailClient::new())
        }
    };

    let oauth: Arc<dyn OAuthProvider> = match &config.oauth {
        Some(settings) => {
            tracing::info!("OAuth login enabled");
            Arc::new(GoogleOAuth::new(
                settings.client_id.clone(),
                settings.client_secret.clone(),
                settings.redirect_uri.clone(),
            ))
        }
        None => {
            tracing::info!("OAuth login disabled");
            Arc::new(DisabledOAuth)
        }
    };

    let pool = Arc::new(pool);
    let club_repository = Arc::new(PgClubRepository::new(pool.clone()));
    let test_repository = Arc::new(PgTestRepository::new(pool.clone()));
    let domain_repository = Arc::new(PgDomainRepository::new(pool.clone()));
    let student_repository = Arc::new(PgStudentRepository::new(pool.clone()));
    let code_repository = Arc::new(PgSessionCodeRepository::new(pool.clone()));

    let codec = JwtCodec::new(&config.jwt_secret, config.jwt_expiry_hours);

    let state = AppState {
        club_service: Arc::new(ClubService::new(club_repository)),
        test_service: Arc::new(TestService::new(test_repository.clone())),
        domain_service: Arc::new(DomainService::new(
            domain_repository.clone(),
            student_repository.clone(),
            config.bulk_concurrency,
        )),
        student_service: Arc::new(StudentService::new(
            student_repository.clone(),
            test_repository,
            domain_repository,
            config.bulk_concurrency,
        )),
        auth_service: Arc::new(AuthService::new(
            codec.clone(),
            config.jwt_secret.clone(),
            code_repository,
            student_repository,
            config.session_code_ttl_seconds,
        )),
        notification_service: Arc::new(NotificationService::new(email, config.bulk_concurrency)),
        oauth,
        web_app_url: config.web_app_url.clone(),
    };

    let app = app_router(state, codec);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
