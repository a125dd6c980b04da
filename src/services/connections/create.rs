use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConnectionService;
use crate::models::ErrorResponse;
use crate::models::connections::requests::CreateConnectionRequest;

pub async fn create_connection(
    service: &ConnectionService,
    request: &HttpRequest,
    connection_data: CreateConnectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_connection(connection_data.user_id).await {
        Ok(()) => Ok(HttpResponse::Created().finish()),
        Err(e) => {
            error!("Connection creation failed: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                "Unexpected error while creating new connection",
            )))
        }
    }
}
