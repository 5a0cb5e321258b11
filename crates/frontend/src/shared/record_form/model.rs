use crate::shared::api_utils::CollectionClient;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_state::SubmitRequest;

/// Sends a validated create/update request
pub async fn save(client: &CollectionClient, request: &SubmitRequest) -> Result<(), ApiError> {
    match request {
        SubmitRequest::Create { payload } => client.create(payload).await,
        SubmitRequest::Update { id, payload } => client.update(id, payload).await,
    }
}

pub async fn remove(client: &CollectionClient, id: &str) -> Result<(), ApiError> {
    client.delete(id).await
}
