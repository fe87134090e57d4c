use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::builder::EmailBuilder;
use crate::configuration::LettermintSettings;
use crate::email::{EmailRequest, EmailResponse};
use crate::error::LettermintError;
use crate::whitelist::EmailWhitelist;

const TOKEN_HEADER: &str = "x-lettermint-token";
const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// HTTP client for the Lettermint API.
///
/// Built once from [`LettermintSettings`] and reused for every call: the
/// underlying `reqwest::Client` pools connections, and the whitelist sets
/// are populated at construction and never mutated afterwards, so sharing
/// across tasks is safe. Dropping a future returned by
/// [`send_email`](Self::send_email) or [`send_batch`](Self::send_batch)
/// aborts the in-flight call.
pub struct LettermintClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
    whitelist: EmailWhitelist,
}

impl LettermintClient {
    pub fn new(settings: LettermintSettings) -> Result<Self, LettermintError> {
        if settings.api_key.expose_secret().trim().is_empty() {
            return Err(LettermintError::Configuration("api key is required".into()));
        }

        let http_client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| {
                LettermintError::Configuration(format!(
                    "failed to build the HTTP transport: {}",
                    e
                ))
            })?;

        Ok(Self {
            http_client,
            // Stored without a trailing slash so path joining stays uniform
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            whitelist: EmailWhitelist::new(&settings.email_whitelist),
        })
    }

    /// Starts a fluent [`EmailBuilder`] bound to this client.
    pub fn email(&self) -> EmailBuilder<'_> {
        EmailBuilder::new(self)
    }

    /// The whitelist this client applies to recipient addresses.
    pub fn whitelist(&self) -> &EmailWhitelist {
        &self.whitelist
    }

    /// Sends a single email.
    ///
    /// The request must be structurally complete (`from`, at least one
    /// `to`, `subject`); anything less fails before network I/O. An
    /// idempotency key, when present, travels as the `Idempotency-Key`
    /// header only.
    #[tracing::instrument(
        name = "Send an email through Lettermint",
        skip(self, request),
        fields(recipients = request.to.len(), route = %request.route)
    )]
    pub async fn send_email(
        &self,
        request: &EmailRequest,
    ) -> Result<EmailResponse, LettermintError> {
        validate(std::slice::from_ref(request))?;

        let mut http_request = self
            .http_client
            .post(format!("{}/send", self.base_url))
            .header(TOKEN_HEADER, self.api_key.expose_secret())
            .json(request);
        if let Some(key) = &request.idempotency_key {
            http_request = http_request.header(IDEMPOTENCY_HEADER, key);
        }

        let response = http_request.send().await?;
        read_response(response).await
    }

    /// Sends a batch of emails in one call.
    ///
    /// Every request is validated up front; one incomplete member aborts
    /// the whole batch before anything is sent. Responses come back in
    /// request order. There are no idempotency semantics at the batch
    /// level, so keys on individual requests are not transmitted.
    #[tracing::instrument(
        name = "Send an email batch through Lettermint",
        skip(self, requests),
        fields(batch_size = requests.len())
    )]
    pub async fn send_batch(
        &self,
        requests: &[EmailRequest],
    ) -> Result<Vec<EmailResponse>, LettermintError> {
        if requests.is_empty() {
            return Err(LettermintError::InvalidRequest(
                "at least one email request is required".into(),
            ));
        }
        validate(requests)?;

        let response = self
            .http_client
            .post(format!("{}/send/batch", self.base_url))
            .header(TOKEN_HEADER, self.api_key.expose_secret())
            .json(requests)
            .send()
            .await?;
        read_response(response).await
    }
}

/// Structural completeness check shared by both dispatch paths. Runs before
/// any network I/O; the first incomplete request aborts the whole call.
fn validate(requests: &[EmailRequest]) -> Result<(), LettermintError> {
    for request in requests {
        if request.from.trim().is_empty() {
            return Err(LettermintError::InvalidRequest("from is required".into()));
        }
        if request.to.is_empty() {
            return Err(LettermintError::InvalidRequest(
                "at least one recipient is required".into(),
            ));
        }
        if request.subject.trim().is_empty() {
            return Err(LettermintError::InvalidRequest(
                "subject is required".into(),
            ));
        }
    }
    Ok(())
}

/// Maps an HTTP outcome to a typed result: non-success statuses carry the
/// raw body, success bodies must deserialize or the call fails with a
/// protocol error.
async fn read_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LettermintError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(LettermintError::Api { status, body });
    }
    serde_json::from_str(&body).map_err(LettermintError::Protocol)
}
