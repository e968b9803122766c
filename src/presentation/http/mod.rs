use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, meals::MealsEndpoints, root::ApiState, users::UsersEndpoints,
};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;
pub mod security;

/// API under `/api`, Swagger UI at `/`.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let endpoints = (
        HealthEndpoints,
        UsersEndpoints::new(state.clone()),
        MealsEndpoints::new(state),
    );
    let api_service = OpenApiService::new(endpoints, "Daily Diet API", env!("CARGO_PKG_VERSION"))
        .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Cors::new())
        .with(Tracing)
}
