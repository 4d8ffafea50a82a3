use super::repo::{StoreError, VeterinarianStore};
use registry_types::Veterinarian;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Veterinario no encontrado")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct VeterinarianService {
    store: Arc<dyn VeterinarianStore>,
}

impl VeterinarianService {
    pub fn new(store: Arc<dyn VeterinarianStore>) -> Self {
        Self { store }
    }

    pub async fn create_veterinarian(
        &self,
        vet: Veterinarian,
    ) -> Result<Veterinarian, ServiceError> {
        self.store.create(&vet).await?;
        info!(id = %vet.id, "veterinarian created");
        Ok(vet)
    }

    /// Rejects the update with [`ServiceError::NotFound`] unless the id is already stored.
    pub async fn update_veterinarian(
        &self,
        vet: Veterinarian,
    ) -> Result<Veterinarian, ServiceError> {
        if self.store.get_by_id(&vet.id).await?.is_none() {
            debug!(id = %vet.id, "update rejected, veterinarian missing");
            return Err(ServiceError::NotFound);
        }

        self.store.update(&vet).await?;
        info!(id = %vet.id, "veterinarian updated");
        Ok(vet)
    }

    pub async fn get_all_veterinarians(&self) -> Result<Vec<Veterinarian>, ServiceError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_veterinarian(&self, id: &str) -> Result<Veterinarian, ServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
