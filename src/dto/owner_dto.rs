use serde::Deserialize;

// Request para crear un propietario
#[derive(Debug, Deserialize)]
pub struct CreateOwnerRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
}

// Request para actualizar un propietario (todos los campos requeridos,
// igual que el alta)
#[derive(Debug, Deserialize)]
pub struct UpdateOwnerRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
}
