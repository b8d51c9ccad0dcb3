use crate::features::home::dtos::{HighlightDto, HomeResponseDto, QuickLinkDto};

pub const OUVIDORIA_URL: &str = "https://www.guarulhos.sp.gov.br/ouvidoria-geral-do-municipio";
pub const CAMARA_URL: &str = "https://www.camaraguarulhos.sp.gov.br/";
pub const SERVICOS_URL: &str = "https://portal.guarulhos.sp.gov.br/servicos";

/// Content of the home screen
#[derive(Default)]
pub struct HomeService;

impl HomeService {
    pub fn new() -> Self {
        Self
    }

    pub fn home(&self) -> HomeResponseDto {
        HomeResponseDto {
            title: "Comunica Guarulhos".to_string(),
            tagline: "Sua voz constrói a cidade.".to_string(),
            quick_links: self.quick_links(),
            highlights: vec![
                HighlightDto {
                    tone: "info".to_string(),
                    text: "345 demandas resolvidas em 2025.".to_string(),
                },
                HighlightDto {
                    tone: "warning".to_string(),
                    text: "12 problemas de Iluminação em aberto.".to_string(),
                },
            ],
        }
    }

    fn quick_links(&self) -> Vec<QuickLinkDto> {
        [
            ("ouvidoria", "Ouvidoria", OUVIDORIA_URL),
            ("camara", "Câmara Mun.", CAMARA_URL),
            ("servicos", "Serviços Online da Prefeitura", SERVICOS_URL),
        ]
        .into_iter()
        .map(|(key, label, url)| QuickLinkDto {
            key: key.to_string(),
            label: label.to_string(),
            url: url.to_string(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_has_three_quick_links() {
        let home = HomeService::new().home();
        let keys: Vec<&str> = home.quick_links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["ouvidoria", "camara", "servicos"]);
        assert!(home.quick_links.iter().all(|l| l.url.starts_with("https://")));
    }
}
