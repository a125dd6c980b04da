pub mod count;
pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::connections::requests::CreateConnectionRequest;
use crate::storage::Storage;

pub struct ConnectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConnectionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub fn new_with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 统计联系总数
    pub async fn count_connections(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::count_connections(self, request).await
    }

    // 为指定教师记录一次联系
    pub async fn create_connection(
        &self,
        request: &HttpRequest,
        connection_data: CreateConnectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_connection(self, request, connection_data).await
    }
}
