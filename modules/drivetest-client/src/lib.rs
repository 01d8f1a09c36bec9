pub mod error;

pub use error::{ClientError, Result};

use drivetest_common::{Criteria, CriteriaUpdate, Site, SiteUpdate, TestResult, TimeSeries};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// One file selected for upload: original name plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// HTTP client for the drive-test results backend.
///
/// Every record lives on the backend; this client is the console's only
/// path to persistent state. No timeouts are set beyond reqwest defaults
/// and no call is retried.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response into an `Api` error carrying the status and
    /// raw body text; pass 2xx responses through.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }

    // --- Test results ---

    /// Upload one or more drive-test ZIP bundles for ingestion. Files go
    /// under the repeated `files` multipart field.
    pub async fn process_zip(&self, files: Vec<UploadFile>) -> Result<Value> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", Part::bytes(file.bytes).file_name(file.name));
        }
        let resp = self
            .client
            .post(self.endpoint("/process_zip/"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn list_test_results(&self) -> Result<Vec<TestResult>> {
        let resp = self
            .client
            .get(self.endpoint("/test_results"))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn get_test_result(&self, filename: &str) -> Result<TestResult> {
        let resp = self
            .client
            .get(self.endpoint(&format!("/test_results/{filename}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn delete_test_result(&self, filename: &str) -> Result<Value> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("/test_results/{filename}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// Time-series traces for one test result's KPI columns.
    pub async fn timeseries(&self, filename: &str) -> Result<TimeSeries> {
        let resp = self
            .client
            .get(self.endpoint(&format!("/api/timeseries/{filename}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    // --- Sites ---

    /// Upload a site list CSV under the single `file` multipart field.
    pub async fn upload_sites(&self, file: UploadFile) -> Result<Value> {
        let form = Form::new().part("file", Part::bytes(file.bytes).file_name(file.name));
        let resp = self
            .client
            .post(self.endpoint("/sites/upload"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn list_sites(&self) -> Result<Vec<Site>> {
        let resp = self.client.get(self.endpoint("/sites")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn get_site(&self, siteid_sectorid: &str) -> Result<Site> {
        let resp = self
            .client
            .get(self.endpoint(&format!("/site/{siteid_sectorid}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn update_site(&self, siteid_sectorid: &str, update: &SiteUpdate) -> Result<Value> {
        let resp = self
            .client
            .put(self.endpoint(&format!("/site/{siteid_sectorid}")))
            .json(update)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn delete_site(&self, siteid_sectorid: &str) -> Result<Value> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("/site/{siteid_sectorid}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    // --- Criteria ---

    /// Upload a criteria CSV under the single `file` multipart field.
    pub async fn upload_criteria(&self, file: UploadFile) -> Result<Value> {
        let form = Form::new().part("file", Part::bytes(file.bytes).file_name(file.name));
        let resp = self
            .client
            .post(self.endpoint("/criteria/upload"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn list_criteria(&self) -> Result<Vec<Criteria>> {
        let resp = self.client.get(self.endpoint("/criteria")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn get_criteria(&self, id: i64) -> Result<Criteria> {
        let resp = self
            .client
            .get(self.endpoint(&format!("/criteria/{id}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn update_criteria(&self, id: i64, update: &CriteriaUpdate) -> Result<Value> {
        let resp = self
            .client
            .put(self.endpoint(&format!("/criteria/{id}")))
            .json(update)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn delete_criteria(&self, id: i64) -> Result<Value> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("/criteria/{id}")))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }
}
