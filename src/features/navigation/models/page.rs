use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Screens of the app. Every page is reachable from every other page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Quick links and highlights
    #[default]
    Home,
    /// Incident report form
    NewReport,
    /// Reports submitted in the current session
    MyReports,
    /// Incident map placeholder
    IncidentMap,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::NewReport,
        Page::MyReports,
        Page::IncidentMap,
    ];

    /// Wire identifier, same as the serde form
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::NewReport => "new_report",
            Page::MyReports => "my_reports",
            Page::IncidentMap => "incident_map",
        }
    }

    /// Screen title shown in the page header
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Comunica Guarulhos",
            Page::NewReport => "Nova Comunicação",
            Page::MyReports => "Minhas Demandas",
            Page::IncidentMap => "Ocorrências na Região",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::NewReport => "new_report.html",
            Page::MyReports => "my_reports.html",
            Page::IncidentMap => "incident_map.html",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Current-page holder for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Page,
}

impl NavigationState {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn go_to(&mut self, page: Page) {
        self.current = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_starts_at_home() {
        assert_eq!(NavigationState::default().current(), Page::Home);
    }

    #[test]
    fn test_navigation_is_last_write_wins() {
        let mut state = NavigationState::default();
        for page in [Page::IncidentMap, Page::NewReport, Page::NewReport, Page::MyReports] {
            state.go_to(page);
            assert_eq!(state.current(), page);
        }
    }

    #[test]
    fn test_every_page_reachable_from_every_page() {
        for from in Page::ALL {
            for to in Page::ALL {
                let mut state = NavigationState::default();
                state.go_to(from);
                state.go_to(to);
                assert_eq!(state.current(), to);
            }
        }
    }

    #[test]
    fn test_page_wire_ids_match_serde() {
        for page in Page::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.id()));
        }
    }

    #[test]
    fn test_unknown_page_id_is_rejected() {
        assert!(serde_json::from_str::<Page>("\"minhas_demandas\"").is_err());
        assert!(serde_json::from_str::<Page>("\"settings\"").is_err());
    }
}
