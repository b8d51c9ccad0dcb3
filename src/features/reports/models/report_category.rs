use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Problem categories a citizen can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Pothole,
    Garbage,
    StreetLighting,
    Drainage,
    TrafficSignage,
    FallenTree,
    AbandonedVehicle,
    Noise,
    Other,
}

impl ReportCategory {
    /// Display order of the form's category picker
    pub const ALL: [ReportCategory; 9] = [
        ReportCategory::Pothole,
        ReportCategory::Garbage,
        ReportCategory::StreetLighting,
        ReportCategory::Drainage,
        ReportCategory::TrafficSignage,
        ReportCategory::FallenTree,
        ReportCategory::AbandonedVehicle,
        ReportCategory::Noise,
        ReportCategory::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReportCategory::Pothole => "pothole",
            ReportCategory::Garbage => "garbage",
            ReportCategory::StreetLighting => "street_lighting",
            ReportCategory::Drainage => "drainage",
            ReportCategory::TrafficSignage => "traffic_signage",
            ReportCategory::FallenTree => "fallen_tree",
            ReportCategory::AbandonedVehicle => "abandoned_vehicle",
            ReportCategory::Noise => "noise",
            ReportCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportCategory::Pothole => "Buraco na Via / Asfalto",
            ReportCategory::Garbage => "Lixo e Entulho Acumulado",
            ReportCategory::StreetLighting => "Iluminação Pública (Apagada/Queimada)",
            ReportCategory::Drainage => "Drenagem / Esgoto / Bueros",
            ReportCategory::TrafficSignage => "Sinalização de Trânsito",
            ReportCategory::FallenTree => "Árvore Caída / Poda",
            ReportCategory::AbandonedVehicle => "Carro Abandonado",
            ReportCategory::Noise => "Barulho / Poluição Sonora",
            ReportCategory::Other => "Outro / Geral",
        }
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the slug or the exact display label
impl FromStr for ReportCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReportCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.label() == s)
            .ok_or_else(|| s.to_string())
    }
}
