use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, warn};

use drivetest_client::{BackendClient, UploadFile};
use drivetest_common::{Criteria, CriteriaUpdate, Site, SiteUpdate};

use crate::components::{
    render_criteria, render_plots, render_sites, render_test_results, test_result_detail,
    test_result_to_row, CriteriaEditor, SiteEditor, TestResultRow, UploadStatus,
};
use crate::upload::{self, ListingTarget, UploadSpec};
use crate::AppState;

// --- Listing loaders ---
//
// A failed listing fetch is logged and the page renders empty; there is no
// user-visible error for background loads, unlike uploads and edits.

async fn load_test_results(backend: &BackendClient) -> Vec<TestResultRow> {
    match backend.list_test_results().await {
        Ok(results) => results.iter().map(test_result_to_row).collect(),
        Err(e) => {
            warn!(error = %e, "Failed to load test results");
            Vec::new()
        }
    }
}

async fn load_sites(backend: &BackendClient) -> Vec<Site> {
    match backend.list_sites().await {
        Ok(sites) => sites,
        Err(e) => {
            warn!(error = %e, "Failed to load sites");
            Vec::new()
        }
    }
}

async fn load_criteria(backend: &BackendClient) -> Vec<Criteria> {
    match backend.list_criteria().await {
        Ok(criteria) => criteria,
        Err(e) => {
            warn!(error = %e, "Failed to load criteria");
            Vec::new()
        }
    }
}

// --- Listing pages ---

pub async fn test_results_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let rows = load_test_results(&state.backend).await;
    Html(render_test_results(rows, None, None, None))
}

pub async fn sites_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let rows = load_sites(&state.backend).await;
    Html(render_sites(rows, None, None, None))
}

pub async fn criteria_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let rows = load_criteria(&state.backend).await;
    Html(render_criteria(rows, None, None, None))
}

// --- Uploads ---

/// Terminal result of one upload attempt.
struct UploadOutcome {
    status: UploadStatus,
    result_json: Option<String>,
}

impl UploadOutcome {
    fn error(message: impl Into<String>) -> Self {
        Self { status: UploadStatus::error(message), result_json: None }
    }
}

/// Read every selected file out of the multipart body. Browsers submit one
/// empty unnamed part when the file input was left empty; those are dropped
/// so the zero-file validation can fire.
async fn collect_files(mut multipart: Multipart) -> Result<Vec<UploadFile>, MultipartError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if name.is_empty() && bytes.is_empty() {
            continue;
        }
        files.push(UploadFile { name, bytes: bytes.to_vec() });
    }
    Ok(files)
}

/// Validate the selection. Zero selected files is a local validation error:
/// the backend is never called.
async fn read_selection(
    spec: UploadSpec,
    multipart: Multipart,
) -> Result<Vec<UploadFile>, UploadOutcome> {
    let files = match collect_files(multipart).await {
        Ok(files) => files,
        Err(e) => {
            warn!(error = %e, form = spec.form_id, "Failed to read multipart upload");
            return Err(UploadOutcome::error(format!("Error: {e}")));
        }
    };
    if files.is_empty() {
        return Err(UploadOutcome::error(spec.mode.empty_message()));
    }
    Ok(files)
}

/// Map the backend's response onto the status element and the shared
/// results area: the JSON body is shown verbatim, pretty-printed.
fn complete_upload(result: drivetest_client::Result<serde_json::Value>) -> UploadOutcome {
    match result {
        Ok(body) => UploadOutcome {
            status: UploadStatus::success("Upload successful"),
            result_json: Some(serde_json::to_string_pretty(&body).unwrap_or_default()),
        },
        Err(e) => {
            warn!(error = %e, "Upload failed");
            UploadOutcome::error(format!("Error: {e}"))
        }
    }
}

pub async fn upload_zip(State(state): State<Arc<AppState>>, multipart: Multipart) -> Html<String> {
    let spec = upload::ZIP_UPLOAD;
    let outcome = match read_selection(spec, multipart).await {
        Ok(files) => complete_upload(state.backend.process_zip(files).await),
        Err(outcome) => outcome,
    };
    // Refresh exactly the configured target listing.
    debug!(listing = spec.target.href(), "Refreshing listing after upload");
    let rows = load_test_results(&state.backend).await;
    Html(render_test_results(rows, Some(outcome.status), outcome.result_json, None))
}

pub async fn upload_sites(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Html<String> {
    let spec = upload::SITE_UPLOAD;
    let outcome = match read_selection(spec, multipart).await {
        Ok(mut files) => complete_upload(state.backend.upload_sites(files.remove(0)).await),
        Err(outcome) => outcome,
    };
    debug!(listing = spec.target.href(), "Refreshing listing after upload");
    let rows = load_sites(&state.backend).await;
    Html(render_sites(rows, Some(outcome.status), outcome.result_json, None))
}

pub async fn upload_criteria(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Html<String> {
    let spec = upload::CRITERIA_UPLOAD;
    let outcome = match read_selection(spec, multipart).await {
        Ok(mut files) => complete_upload(state.backend.upload_criteria(files.remove(0)).await),
        Err(outcome) => outcome,
    };
    debug!(listing = spec.target.href(), "Refreshing listing after upload");
    let rows = load_criteria(&state.backend).await;
    Html(render_criteria(rows, Some(outcome.status), outcome.result_json, None))
}

// --- Test results ---

pub async fn test_result_detail_page(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    match state.backend.get_test_result(&filename).await {
        Ok(result) => {
            let rows = load_test_results(&state.backend).await;
            let detail = test_result_detail(&result);
            Html(render_test_results(rows, None, None, Some(detail))).into_response()
        }
        Err(e) => {
            warn!(error = %e, filename = filename.as_str(), "Failed to fetch test result details");
            Redirect::to(ListingTarget::TestResults.href()).into_response()
        }
    }
}

pub async fn delete_test_result(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Redirect {
    // The listing refreshes whether or not the DELETE succeeded.
    if let Err(e) = state.backend.delete_test_result(&filename).await {
        warn!(error = %e, filename = filename.as_str(), "Failed to delete test result");
    }
    Redirect::to(ListingTarget::TestResults.href())
}

pub async fn plot_page(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Html<String> {
    let series = match state.backend.timeseries(&filename).await {
        Ok(series) => series,
        Err(e) => {
            warn!(error = %e, filename = filename.as_str(), "Failed to load time-series data");
            drivetest_common::TimeSeries { data: Vec::new(), time_range: None }
        }
    };
    Html(render_plots(filename, series.data, series.time_range))
}

// --- Sites ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteForm {
    pub market: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub criteria: String,
    pub criteria_value: String,
}

/// Submit sends the full object back; latitude and longitude were already
/// coerced to numbers by form deserialization.
fn site_update_from_form(form: SiteForm) -> SiteUpdate {
    SiteUpdate {
        market: form.market,
        site_name: form.site_name,
        latitude: form.latitude,
        longitude: form.longitude,
        criteria: form.criteria,
        criteria_value: form.criteria_value,
    }
}

pub async fn edit_site_page(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Response {
    match state.backend.get_site(&key).await {
        Ok(site) => {
            let rows = load_sites(&state.backend).await;
            Html(render_sites(rows, None, None, Some(SiteEditor { site }))).into_response()
        }
        Err(e) => {
            warn!(error = %e, site = key.as_str(), "Failed to fetch site details");
            Redirect::to(ListingTarget::Sites.href()).into_response()
        }
    }
}

pub async fn update_site(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Form(form): Form<SiteForm>,
) -> Redirect {
    // A failed site update is logged only; the listing reloads either way.
    let update = site_update_from_form(form);
    if let Err(e) = state.backend.update_site(&key, &update).await {
        warn!(error = %e, site = key.as_str(), "Failed to update site");
    }
    Redirect::to(ListingTarget::Sites.href())
}

pub async fn delete_site(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Redirect {
    if let Err(e) = state.backend.delete_site(&key).await {
        warn!(error = %e, site = key.as_str(), "Failed to delete site");
    }
    Redirect::to(ListingTarget::Sites.href())
}

// --- Criteria ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CriteriaForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub kpi_name: String,
    pub pass_condition: String,
    pub pass_value: f64,
    pub conditional_pass_condition: String,
    pub conditional_pass_value: f64,
    pub unit: String,
}

fn criteria_update_from_form(form: CriteriaForm) -> CriteriaUpdate {
    CriteriaUpdate {
        kind: form.kind,
        value: form.value,
        kpi_name: form.kpi_name,
        pass_condition: form.pass_condition,
        pass_value: form.pass_value,
        conditional_pass_condition: form.conditional_pass_condition,
        conditional_pass_value: form.conditional_pass_value,
        unit: form.unit,
    }
}

/// Rebuild the record shown in the modal from the submitted payload, so a
/// rejected update re-opens with the user's in-progress values.
fn criteria_from_update(id: i64, update: CriteriaUpdate) -> Criteria {
    Criteria {
        id,
        kind: update.kind,
        value: update.value,
        kpi_name: update.kpi_name,
        pass_condition: update.pass_condition,
        pass_value: update.pass_value,
        conditional_pass_condition: update.conditional_pass_condition,
        conditional_pass_value: update.conditional_pass_value,
        unit: update.unit,
    }
}

pub async fn edit_criteria_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response {
    match state.backend.get_criteria(id).await {
        Ok(criteria) => {
            let rows = load_criteria(&state.backend).await;
            let editor = CriteriaEditor { criteria, error: None };
            Html(render_criteria(rows, None, None, Some(editor))).into_response()
        }
        Err(e) => {
            warn!(error = %e, id, "Failed to fetch criteria details");
            Redirect::to(ListingTarget::Criteria.href()).into_response()
        }
    }
}

pub async fn update_criteria(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<CriteriaForm>,
) -> Response {
    let update = criteria_update_from_form(form);
    match state.backend.update_criteria(id, &update).await {
        Ok(_) => Redirect::to(ListingTarget::Criteria.href()).into_response(),
        Err(e) => {
            warn!(error = %e, id, "Failed to update criteria");
            let detail = e.backend_detail().unwrap_or_else(|| e.to_string());
            let rows = load_criteria(&state.backend).await;
            let editor = CriteriaEditor {
                criteria: criteria_from_update(id, update),
                error: Some(detail),
            };
            Html(render_criteria(rows, None, None, Some(editor))).into_response()
        }
    }
}

pub async fn delete_criteria(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(e) = state.backend.delete_criteria(id).await {
        warn!(error = %e, id, "Failed to delete criteria");
    }
    Redirect::to(ListingTarget::Criteria.href())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dropzone::StatusKind;
    use drivetest_client::ClientError;
    use serde_json::json;

    #[test]
    fn unchanged_site_edit_round_trips_the_record() {
        let site = Site {
            id: 7,
            siteid_sectorid: "DAL001_1".to_string(),
            market: "Dallas".to_string(),
            site_name: "DAL001".to_string(),
            latitude: 32.7767,
            longitude: -96.797,
            criteria: "market".to_string(),
            criteria_value: "Dallas".to_string(),
        };
        // The modal populates the form from the fetched record.
        let form = SiteForm {
            market: site.market.clone(),
            site_name: site.site_name.clone(),
            latitude: site.latitude,
            longitude: site.longitude,
            criteria: site.criteria.clone(),
            criteria_value: site.criteria_value.clone(),
        };
        let update = site_update_from_form(form);
        assert_eq!(update.market, site.market);
        assert_eq!(update.latitude, site.latitude);
        assert_eq!(update.longitude, site.longitude);
        assert_eq!(update.criteria_value, site.criteria_value);
    }

    #[test]
    fn unchanged_criteria_edit_round_trips_the_record() {
        let criteria = Criteria {
            id: 5,
            kind: "market".to_string(),
            value: "Dallas".to_string(),
            kpi_name: "NR_PCell_SS-RSRP".to_string(),
            pass_condition: ">=".to_string(),
            pass_value: -95.0,
            conditional_pass_condition: ">=".to_string(),
            conditional_pass_value: -100.0,
            unit: "dBm".to_string(),
        };
        let form = CriteriaForm {
            kind: criteria.kind.clone(),
            value: criteria.value.clone(),
            kpi_name: criteria.kpi_name.clone(),
            pass_condition: criteria.pass_condition.clone(),
            pass_value: criteria.pass_value,
            conditional_pass_condition: criteria.conditional_pass_condition.clone(),
            conditional_pass_value: criteria.conditional_pass_value,
            unit: criteria.unit.clone(),
        };
        let update = criteria_update_from_form(form);
        let reopened = criteria_from_update(criteria.id, update);
        assert_eq!(reopened, criteria);
    }

    #[test]
    fn criteria_form_coerces_numeric_fields() {
        let form: CriteriaForm = serde_urlencoded_from_str(
            "type=market&value=Dallas&kpi_name=NR_PCell_SS-RSRP&pass_condition=%3E%3D\
             &pass_value=-95.5&conditional_pass_condition=%3E%3D&conditional_pass_value=-100\
             &unit=dBm",
        );
        assert_eq!(form.pass_value, -95.5);
        assert_eq!(form.conditional_pass_value, -100.0);
    }

    fn serde_urlencoded_from_str(input: &str) -> CriteriaForm {
        serde_urlencoded::from_str(input).expect("form should deserialize")
    }

    #[test]
    fn successful_upload_pretty_prints_the_body() {
        let outcome = complete_upload(Ok(json!({"inserted": 3})));
        assert_eq!(outcome.status.kind, StatusKind::Success);
        assert_eq!(outcome.status.message, "Upload successful");
        assert_eq!(outcome.result_json.as_deref(), Some("{\n  \"inserted\": 3\n}"));
    }

    #[test]
    fn failed_upload_carries_status_and_body_text() {
        let outcome = complete_upload(Err(ClientError::Api {
            status: 400,
            message: "No files were uploaded".to_string(),
        }));
        assert_eq!(outcome.status.kind, StatusKind::Error);
        assert!(outcome.status.message.starts_with("Error: HTTP error! status: 400"));
        assert!(outcome.status.message.contains("No files were uploaded"));
        assert!(outcome.result_json.is_none());
    }

    #[test]
    fn network_failure_surfaces_as_generic_error() {
        let outcome =
            complete_upload(Err(ClientError::Network("connection refused".to_string())));
        assert_eq!(outcome.status.kind, StatusKind::Error);
        assert_eq!(outcome.status.message, "Error: Network error: connection refused");
    }
}
