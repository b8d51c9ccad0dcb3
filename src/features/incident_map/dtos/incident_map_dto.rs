use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Availability of the incident map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncidentMapResponseDto {
    pub available: bool,
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub notice: String,
}

impl IncidentMapResponseDto {
    /// The map needs a backend that is never configured here
    pub fn unavailable() -> Self {
        Self {
            available: false,
            title: "Ocorrências na Região".to_string(),
            subtitle: "Veja e confirme problemas relatados por outros cidadãos.".to_string(),
            message: "Ocorrências não configuradas sem banco de dados.".to_string(),
            notice: "Modo demonstração: Esta funcionalidade não está disponível sem conexão com o banco de dados.".to_string(),
        }
    }
}
