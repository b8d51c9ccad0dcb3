use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::core::session::{Session, SessionContext};
use crate::features::home::HomeService;
use crate::features::incident_map::dtos::IncidentMapResponseDto;
use crate::features::navigation::dtos::NavigateDto;
use crate::features::navigation::models::Page;
use crate::features::navigation::NavigationService;
use crate::features::reports::dtos::SubmitReportDto;
use crate::features::reports::handlers::read_report_form;
use crate::features::reports::services::{
    validate_submission, EMPTY_REPORTS_MESSAGE, SESSION_HISTORY_NOTE,
};
use crate::features::reports::ReportService;
use crate::shared::templates::render_template;

/// State for page handlers
#[derive(Clone)]
pub struct PageState {
    pub navigation: Arc<NavigationService>,
    pub reports: Arc<ReportService>,
    pub home: Arc<HomeService>,
}

/// Form values echoed back into the report form
#[derive(Debug, Default, serde::Serialize)]
struct FormValues {
    category: String,
    description: String,
    latitude: String,
    longitude: String,
}

impl From<&SubmitReportDto> for FormValues {
    fn from(dto: &SubmitReportDto) -> Self {
        Self {
            category: dto.category.clone(),
            description: dto.description.clone().unwrap_or_default(),
            latitude: dto.latitude.clone(),
            longitude: dto.longitude.clone(),
        }
    }
}

/// Render `page` for the session, with an optional inline form error
fn render(
    state: &PageState,
    ctx: &mut SessionContext,
    page: Page,
    error: Option<String>,
    values: FormValues,
) -> Result<String> {
    let flash = ctx.take_flash();
    let nav_items = state.navigation.nav_items(page);
    let title = page.title();

    let html = match page {
        Page::Home => render_template(
            page.template(),
            context! { title, nav_items, flash, home => state.home.home() },
        )?,
        Page::NewReport => render_template(
            page.template(),
            context! { title, nav_items, flash, error, values, form => state.reports.form() },
        )?,
        Page::MyReports => render_template(
            page.template(),
            context! {
                title,
                nav_items,
                flash,
                reports => state.reports.list(ctx),
                empty_message => EMPTY_REPORTS_MESSAGE,
                history_note => SESSION_HISTORY_NOTE,
            },
        )?,
        Page::IncidentMap => render_template(
            page.template(),
            context! { title, nav_items, flash, map => IncidentMapResponseDto::unavailable() },
        )?,
    };

    Ok(html)
}

/// Page dispatcher: render whatever page the session is on
pub async fn current_page(session: Session, State(state): State<PageState>) -> Result<Html<String>> {
    let mut ctx = session.context.lock().await;
    let page = ctx.current_page();
    let html = render(&state, &mut ctx, page, None, FormValues::default())?;
    Ok(Html(html))
}

/// Bottom bar action: switch page and re-render.
///
/// Unknown page identifiers are rejected with 400.
pub async fn navigate(
    session: Session,
    State(state): State<PageState>,
    AppForm(dto): AppForm<NavigateDto>,
) -> Redirect {
    let mut ctx = session.context.lock().await;
    state.navigation.go_to(&mut ctx, dto.page);
    Redirect::to("/")
}

/// Report form submission.
///
/// Success moves the session to "my reports" and redirects to the
/// dispatcher. A validation failure re-renders the form with the message
/// inline and the entered values kept.
pub async fn submit_report(
    session: Session,
    State(state): State<PageState>,
    multipart: Multipart,
) -> Result<Response> {
    let dto = read_report_form(multipart).await?;
    let values = FormValues::from(&dto);

    let mut ctx = session.context.lock().await;
    match validate_submission(dto) {
        Ok(report) => {
            let response = state.reports.submit_validated(&mut ctx, report).await?;
            ctx.push_flash(response.notices);
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::warn!("Report form rejected: {}", e);
            let html = render(
                &state,
                &mut ctx,
                Page::NewReport,
                Some(e.user_message()),
                values,
            )?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}
