//! Typed client for the intranet backend REST API.
//!
//! The backend itself is an external collaborator; this module only knows
//! its endpoints and record shapes. All failures surface as
//! [`WorkonError::Transport`] so callers can show a one-line message and
//! offer a retry.

use crate::config::PortalConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use workon_core::account::Role;
use workon_core::{Result, WorkonError};

/// HTTP client for the intranet backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    /// Creates a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Creates a client from the resolved portal configuration.
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.backend.base_url.clone())
    }

    /// Sets the bearer token attached to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        Self::execute(request, path).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.apply_auth(self.client.get(self.url(path)).query(query));
        Self::execute(request, path).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).json(body));
        Self::execute(request, path).await
    }

    async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.apply_auth(self.client.patch(self.url(path)).json(body));
        Self::execute(request, path).await
    }

    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|err| WorkonError::transport(format!("request to {path} failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("[BackendClient] {path} returned {status}: {body}");
            return Err(WorkonError::transport(format!(
                "{path} returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|err| WorkonError::transport(format!("invalid response from {path}: {err}")))
    }

    /// Financial endpoints.
    pub fn financial(&self) -> FinancialApi<'_> {
        FinancialApi { client: self }
    }

    /// Document repository endpoints.
    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi { client: self }
    }

    /// Legal document endpoints.
    pub fn legal(&self) -> LegalApi<'_> {
        LegalApi { client: self }
    }

    /// Audit trail endpoints.
    pub fn audit(&self) -> AuditApi<'_> {
        AuditApi { client: self }
    }

    /// Collaborator dossier endpoints.
    pub fn dossier(&self) -> DossierApi<'_> {
        DossierApi { client: self }
    }

    /// Trade client endpoints.
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi { client: self }
    }

    /// Portal user endpoints.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

// ============================================================================
// Endpoint groups
// ============================================================================

pub struct FinancialApi<'a> {
    client: &'a BackendClient,
}

impl FinancialApi<'_> {
    /// `GET /financial`: monthly revenue/expense series, in month order.
    pub async fn list(&self) -> Result<Vec<FinancialEntry>> {
        self.client.get_json("/financial").await
    }
}

pub struct DocumentsApi<'a> {
    client: &'a BackendClient,
}

impl DocumentsApi<'_> {
    /// `GET /documents`
    pub async fn list(&self) -> Result<Vec<DocumentRecord>> {
        self.client.get_json("/documents").await
    }
}

pub struct LegalApi<'a> {
    client: &'a BackendClient,
}

impl LegalApi<'_> {
    /// `GET /legal`
    pub async fn list(&self) -> Result<Vec<LegalDocumentRecord>> {
        self.client.get_json("/legal").await
    }

    /// `PATCH /legal/{id}`: updates a document's status.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<LegalDocumentRecord> {
        let body = StatusPatch {
            status: status.to_string(),
        };
        self.client.patch_json(&format!("/legal/{id}"), &body).await
    }
}

pub struct AuditApi<'a> {
    client: &'a BackendClient,
}

impl AuditApi<'_> {
    /// `GET /audit`
    pub async fn list(&self) -> Result<Vec<AuditRecord>> {
        self.client.get_json("/audit").await
    }

    /// `POST /audit`: records an access event.
    pub async fn record(&self, action: &str, resource: &str) -> Result<AuditRecord> {
        let body = AuditEvent {
            action: action.to_string(),
            resource: resource.to_string(),
        };
        self.client.post_json("/audit", &body).await
    }
}

pub struct DossierApi<'a> {
    client: &'a BackendClient,
}

impl DossierApi<'_> {
    /// `GET /dossier/search?q=`: looks up a collaborator dossier.
    pub async fn search(&self, term: &str) -> Result<Option<DossierRecord>> {
        self.client
            .get_json_with_query("/dossier/search", &[("q", term)])
            .await
    }
}

pub struct ClientsApi<'a> {
    client: &'a BackendClient,
}

impl ClientsApi<'_> {
    /// `GET /clients`
    pub async fn list(&self) -> Result<Vec<ClientRecord>> {
        self.client.get_json("/clients").await
    }

    /// `GET /clients/{id}`
    pub async fn get_by_id(&self, id: &str) -> Result<ClientRecord> {
        self.client.get_json(&format!("/clients/{id}")).await
    }
}

pub struct UsersApi<'a> {
    client: &'a BackendClient,
}

impl UsersApi<'_> {
    /// `GET /users`
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        self.client.get_json("/users").await
    }
}

// ============================================================================
// Record shapes
// ============================================================================

/// One month in the revenue/expense series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub month: String,
    pub receita: f64,
    pub despesa: f64,
}

/// A document in the general repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
}

/// A document tracked by the legal center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocumentRecord {
    pub id: u64,
    pub name: String,
    pub department: String,
    pub category: String,
    pub version: String,
    pub upload_date: String,
    pub uploaded_by: String,
    pub size: String,
    pub status: String,
    pub file_type: String,
    pub access_count: u64,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: String,
}

/// One entry in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: u64,
    pub user: String,
    pub action: String,
    #[serde(alias = "document")]
    pub resource: String,
    pub timestamp: String,
    #[serde(default)]
    pub ip: Option<String>,
}

#[derive(Debug, Serialize)]
struct AuditEvent {
    action: String,
    resource: String,
}

/// Monthly attendance summary inside a dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointHistoryEntry {
    pub month: String,
    pub absences: u32,
    pub delays: u32,
    pub overtime: u32,
    pub status: String,
}

/// A disciplinary or career event inside a dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub document_url: Option<String>,
}

/// A document attached to a dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DossierDocument {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// A collaborator's composite HR/legal dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DossierRecord {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub role: String,
    pub department: String,
    pub admission_date: String,
    #[serde(default)]
    pub termination_date: Option<String>,
    #[serde(default)]
    pub termination_reason: Option<String>,
    pub status: String,
    pub risk_level: String,
    #[serde(default)]
    pub point_history: Vec<PointHistoryEntry>,
    #[serde(default)]
    pub occurrences: Vec<OccurrenceRecord>,
    #[serde(default)]
    pub documents: Vec<DossierDocument>,
}

/// Trade KPIs for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeKpis {
    pub sell_out: f64,
    pub share_of_shelf: f64,
    pub ruptura: f64,
    pub visitas: u32,
    pub skus_ativos: u32,
}

/// A trade client tracked by the client center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub segment: String,
    pub status: String,
    pub kpis: TradeKpis,
    pub power_bi_url: String,
    pub last_update: String,
}

/// A portal user as known by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub role: Role,
}
