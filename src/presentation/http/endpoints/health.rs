use poem_openapi::{OpenApi, payload::Json, payload::PlainText};

use crate::presentation::http::{endpoints::root::EndpointsTags, responses::ServiceStatusDto};

pub struct HealthEndpoints;

#[OpenApi]
impl HealthEndpoints {
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> PlainText<&'static str> {
        PlainText("OK")
    }

    #[oai(path = "/", method = "get", tag = EndpointsTags::Health)]
    pub async fn status(&self) -> Json<ServiceStatusDto> {
        Json(ServiceStatusDto {
            message: "Daily Diet API OK".to_string(),
        })
    }
}
