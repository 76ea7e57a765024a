use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::warn;

use inventory_application::commands::scan_commands;
use inventory_application::AppState;
use inventory_domain::{ScanOutcome, ScanRequest};

use crate::error::HttpError;
use crate::render::{render_form, FormView};

pub async fn show_form() -> Html<String> {
    Html(render_form(&FormView::default()))
}

pub async fn submit_scan(
    State(state): State<AppState>,
    Form(request): Form<ScanRequest>,
) -> Result<Html<String>, HttpError> {
    let outcome = scan_commands::process_scan(&state, request).await?;
    let page = match outcome {
        ScanOutcome::Recorded { row, persisted, .. } => {
            if !persisted {
                warn!(row = %row, "write failed, page still reports success");
            }
            render_form(&FormView::default())
        }
        ScanOutcome::Rejected {
            error,
            form,
            status,
        } => {
            let message = error.to_string();
            render_form(&FormView {
                barcode: &form.barcode,
                user: &form.name,
                team: &form.team,
                intent: Some(form.intent),
                error: &message,
                status: status.map(|status| status.label()).unwrap_or(""),
            })
        }
    };
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use inventory_application::testing::{InMemorySpreadsheet, RecordedUpdate};
    use inventory_domain::{BarcodeIndex, RuntimeConfig};

    use super::*;
    use crate::build_router;

    fn app(sheets: Arc<InMemorySpreadsheet>) -> axum::Router {
        let config = RuntimeConfig {
            spreadsheet_id: "sheet-1".to_string(),
            ..RuntimeConfig::default()
        };
        build_router(AppState::new(
            config,
            sheets,
            BarcodeIndex::from_pairs([("BC100", "5")]),
        ))
    }

    async fn post_scan(app: axum::Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/scan")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn check_out_writes_row_and_clears_form() {
        let sheets = Arc::new(InMemorySpreadsheet::new());
        let (status, page) = post_scan(
            app(sheets.clone()),
            "barcode=BC100&user=Alice&team=Black&status=checkOut",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            sheets.updates(),
            vec![RecordedUpdate {
                spreadsheet_id: "sheet-1".to_string(),
                range: "C5".to_string(),
                values: vec![vec![
                    "Unavailable".to_string(),
                    "Alice".to_string(),
                    "Black".to_string()
                ]],
            }]
        );
        assert!(page.contains("name=\"barcode\" placeholder=\"Barcode\""));
        assert!(page.contains("name=\"user\" placeholder=\"Name\""));
        assert!(page.contains("<h2 id=\"error\" style=\"color:red;\"></h2>"));
        assert!(!page.contains(" selected"));
    }

    #[tokio::test]
    async fn unknown_barcode_rerenders_with_error() {
        let sheets = Arc::new(InMemorySpreadsheet::new());
        let (status, page) = post_scan(
            app(sheets.clone()),
            "barcode=BC999&user=Alice&team=Black&status=checkOut",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("invalid barcode: please scan again"));
        assert!(page.contains("name=\"barcode\" placeholder=\"Barcode\""));
        assert!(page.contains("name=\"user\" value=\"Alice\""));
        assert!(page.contains("<option value=\"Black\" selected>"));
        assert!(page.contains("<h2 id=\"status\" style=\"color:blue;\"></h2>"));
        assert!(sheets.updates().is_empty());
    }

    #[tokio::test]
    async fn missing_name_shows_live_status() {
        let sheets = Arc::new(InMemorySpreadsheet::new().with_cell("C5", "Unavailable"));
        let (status, page) = post_scan(
            app(sheets.clone()),
            "barcode=BC100&user=&team=Crimson&status=checkIn",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("invalid name: please re-enter name"));
        assert!(page.contains("name=\"barcode\" value=\"BC100\""));
        assert!(page.contains("name=\"user\" placeholder=\"Name\""));
        assert!(page.contains(">Checked Out</h2>"));
        assert!(page.contains("<option value=\"checkIn\" selected>"));
        assert!(sheets.updates().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty() {
        let sheets = Arc::new(InMemorySpreadsheet::new());
        let (status, page) = post_scan(app(sheets.clone()), "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("invalid barcode: please scan again"));
        assert!(sheets.reads().is_empty());
    }

    #[tokio::test]
    async fn failed_write_still_renders_success() {
        let sheets = Arc::new(InMemorySpreadsheet::new().failing_updates());
        let (status, page) = post_scan(
            app(sheets),
            "barcode=BC100&user=Alice&team=Black&status=checkIn",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<h2 id=\"error\" style=\"color:red;\"></h2>"));
    }

    #[tokio::test]
    async fn failed_status_read_is_bad_gateway() {
        let sheets = Arc::new(InMemorySpreadsheet::new().failing_reads());
        let (status, page) = post_scan(
            app(sheets),
            "barcode=BC100&user=&team=Black&status=checkOut",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(page.contains("spreadsheet unavailable"));
    }

    #[tokio::test]
    async fn index_serves_blank_form() {
        let response = app(Arc::new(InMemorySpreadsheet::new()))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<form action=\"/scan\" method=\"post\""));
    }
}
