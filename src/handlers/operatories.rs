use crate::error::ApiError;
use crate::models::operatory::Operatory;
use crate::store::Store;

pub async fn get_operatories(store: &Store) -> Vec<Operatory> {
    store.operatories().await
}

pub async fn get_operatory(store: &Store, id: u32) -> Result<Operatory, ApiError> {
    Ok(store.operatory(id).await?)
}
