use crate::core::session::SessionContext;
use crate::features::navigation::dtos::{NavItemDto, NavigationResponseDto};
use crate::features::navigation::models::Page;

/// Static definition of a bottom bar entry
struct NavItem {
    label: &'static str,
    page: Page,
    prominent: bool,
    /// "Mais" points at home but is never highlighted
    highlightable: bool,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Início",
        page: Page::Home,
        prominent: false,
        highlightable: true,
    },
    NavItem {
        label: "Demandas",
        page: Page::MyReports,
        prominent: false,
        highlightable: true,
    },
    NavItem {
        label: "+",
        page: Page::NewReport,
        prominent: true,
        highlightable: true,
    },
    NavItem {
        label: "Mapa",
        page: Page::IncidentMap,
        prominent: false,
        highlightable: true,
    },
    NavItem {
        label: "Mais",
        page: Page::Home,
        prominent: false,
        highlightable: false,
    },
];

/// Moves sessions between pages and describes the navigation bar
#[derive(Default)]
pub struct NavigationService;

impl NavigationService {
    pub fn new() -> Self {
        Self
    }

    /// Set the session's current page. The next render dispatches on it.
    pub fn go_to(&self, ctx: &mut SessionContext, page: Page) -> NavigationResponseDto {
        let from = ctx.current_page();
        ctx.go_to(page);
        tracing::debug!("Navigation: {} -> {}", from, page);
        self.describe(ctx.current_page())
    }

    pub fn describe(&self, current: Page) -> NavigationResponseDto {
        NavigationResponseDto {
            current_page: current,
            title: current.title().to_string(),
            nav_items: self.nav_items(current),
        }
    }

    pub fn nav_items(&self, current: Page) -> Vec<NavItemDto> {
        NAV_ITEMS
            .iter()
            .map(|item| NavItemDto {
                label: item.label.to_string(),
                page: item.page,
                active: item.highlightable && item.page == current,
                prominent: item.prominent,
            })
            .collect()
    }
}
