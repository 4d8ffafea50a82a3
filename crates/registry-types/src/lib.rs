use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A veterinarian record. The same shape is stored in the `veterinarios`
/// table and sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Veterinarian {
    pub id: String,
    pub email: String,
    pub age: i32,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct VeterinarianPathParams {
    /// Caller-supplied veterinarian id
    pub id: String,
}

/// Error body returned by the API, e.g. `{"detail": "Veterinario no encontrado"}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RootMessage {
    pub message: String,
}

impl Default for RootMessage {
    fn default() -> Self {
        Self {
            message: "Sistema de Veterinarios y Clientes".into(),
        }
    }
}
