use std::{io::Error, sync::Arc};

use poem::{EndpointExt, Route, Server, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tokio::main;

use users_api::{
    config::Config,
    infrastructure::repositories::in_memory::InMemoryUserRepository,
    presentation::http::endpoints::{health::HealthEndpoints, root::ApiState, users::UserEndpoints},
};

const SEED_USERS: &[(&str, &str)] = &[
    ("Alice Carter", "alice@example.com"),
    ("Ben Osei", "ben@example.com"),
    ("Chloe Tanaka", "chloe@example.com"),
    ("Daniel Reyes", "daniel@example.com"),
    ("Erin Walsh", "erin@example.com"),
];

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::try_parse().map_err(Error::other)?;

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!(
        "starting {} server at {}",
        config.environment.as_str(),
        server_url
    );

    let repository = Arc::new(InMemoryUserRepository::with_seed(SEED_USERS));
    let state = Arc::new(ApiState::new(repository));

    let api_service = OpenApiService::new(
        (HealthEndpoints, UserEndpoints::new(state)),
        "Users API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Tracing);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
