use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RecordId, WaitlistError};
use super::filter::FilterCriteria;
use super::notify::Notifier;
use super::sort::SortColumn;
use super::view::WaitlistView;
use crate::error::AppError;

/// The single dashboard session shared by every handler.
pub type SharedWaitlist<N> = Arc<Mutex<WaitlistView<N>>>;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub column: SortColumn,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: usize,
}

/// Router builder exposing the dashboard operations.
pub fn waitlist_router<N>(view: SharedWaitlist<N>) -> Router
where
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/waitlist", get(page_handler::<N>))
        .route("/api/v1/waitlist/filters", get(filters_handler::<N>))
        .route("/api/v1/waitlist/filters/draft", put(draft_handler::<N>))
        .route("/api/v1/waitlist/filters/apply", post(apply_handler::<N>))
        .route("/api/v1/waitlist/filters/clear", post(clear_handler::<N>))
        .route("/api/v1/waitlist/search", put(search_handler::<N>))
        .route("/api/v1/waitlist/sort", post(sort_handler::<N>))
        .route("/api/v1/waitlist/page", put(go_to_page_handler::<N>))
        .route("/api/v1/waitlist/page/next", post(next_page_handler::<N>))
        .route(
            "/api/v1/waitlist/page/previous",
            post(previous_page_handler::<N>),
        )
        .route(
            "/api/v1/waitlist/rows/:record_id/selection",
            post(toggle_row_handler::<N>),
        )
        .route(
            "/api/v1/waitlist/selection/page",
            post(toggle_page_selection_handler::<N>),
        )
        .route(
            "/api/v1/waitlist/selection",
            delete(clear_selection_handler::<N>),
        )
        .route(
            "/api/v1/waitlist/records/:record_id",
            get(open_detail_handler::<N>),
        )
        .route("/api/v1/waitlist/detail", delete(close_detail_handler::<N>))
        .route(
            "/api/v1/notifications",
            get(notification_handler::<N>).delete(dismiss_notification_handler::<N>),
        )
        .with_state(view)
}

fn lock<N>(view: &SharedWaitlist<N>) -> MutexGuard<'_, WaitlistView<N>> {
    view.lock().expect("waitlist mutex poisoned")
}

fn page_response<N: Notifier>(view: &WaitlistView<N>) -> Response {
    (StatusCode::OK, Json(view.visible_page())).into_response()
}

pub(crate) async fn page_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    page_response(&lock(&view))
}

pub(crate) async fn filters_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    (StatusCode::OK, Json(lock(&view).filters())).into_response()
}

pub(crate) async fn draft_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Json(draft): Json<FilterCriteria>,
) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.set_draft(draft);
    (StatusCode::OK, Json(view.filters())).into_response()
}

pub(crate) async fn apply_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.apply_filters();
    page_response(&view)
}

pub(crate) async fn clear_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.clear_filters();
    page_response(&view)
}

pub(crate) async fn search_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Json(request): Json<SearchRequest>,
) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.set_search(request.query);
    page_response(&view)
}

pub(crate) async fn sort_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Json(request): Json<SortRequest>,
) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.sort_by(request.column);
    page_response(&view)
}

pub(crate) async fn go_to_page_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Json(request): Json<PageRequest>,
) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.go_to_page(request.page);
    page_response(&view)
}

pub(crate) async fn next_page_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.next_page();
    page_response(&view)
}

pub(crate) async fn previous_page_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.previous_page();
    page_response(&view)
}

pub(crate) async fn toggle_row_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Path(record_id): Path<u32>,
) -> Result<Response, AppError>
where
    N: Notifier + 'static,
{
    let id = RecordId(record_id);
    let mut view = lock(&view);
    if view.store().get(id).is_none() {
        return Err(WaitlistError::RecordNotFound(id).into());
    }

    let selected = view.toggle_row(id);
    let payload = json!({
        "id": id,
        "selected": selected,
        "selected_count": view.selection().len(),
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

pub(crate) async fn toggle_page_selection_handler<N>(
    State(view): State<SharedWaitlist<N>>,
) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.toggle_select_all();
    page_response(&view)
}

pub(crate) async fn clear_selection_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let mut view = lock(&view);
    view.clear_selection();
    page_response(&view)
}

pub(crate) async fn open_detail_handler<N>(
    State(view): State<SharedWaitlist<N>>,
    Path(record_id): Path<u32>,
) -> Result<Response, AppError>
where
    N: Notifier + 'static,
{
    let detail = lock(&view).open_detail(RecordId(record_id))?;
    Ok((StatusCode::OK, Json(detail)).into_response())
}

pub(crate) async fn close_detail_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let closed = lock(&view).close_detail();
    (StatusCode::OK, Json(json!({ "closed": closed }))).into_response()
}

pub(crate) async fn notification_handler<N>(State(view): State<SharedWaitlist<N>>) -> Response
where
    N: Notifier + 'static,
{
    let toast = lock(&view).notifier().current();
    (StatusCode::OK, Json(json!({ "toast": toast }))).into_response()
}

pub(crate) async fn dismiss_notification_handler<N>(
    State(view): State<SharedWaitlist<N>>,
) -> Response
where
    N: Notifier + 'static,
{
    let dismissed = lock(&view).notifier().dismiss();
    (StatusCode::OK, Json(json!({ "dismissed": dismissed }))).into_response()
}
