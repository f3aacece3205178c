//! HTTP column classifier
//!
//! Executes the classification functions through the platform's function
//! execution endpoint:
//!
//! ```text
//! POST {base_url}/api/v2/functions/queries/{function}/execute[?preview=true]
//! Authorization: Bearer <token>
//! {"parameters": {...}}
//! ```

use super::models::{
    decode_envelope, FunctionExecuteRequest, COLUMN_NAMES_PARAM, COLUMN_TYPES_PARAM,
    DATASET_RID_PARAM,
};
use super::request::ColumnRequest;
use super::ColumnClassifier;
use crate::config::{ClassifierConfig, RetryConfig, SecretString};
use crate::domain::ids::DatasetId;
use crate::domain::{ClassifierError, ColumnAnalysis, ProfilerError, Result};
use crate::log_retry_attempt;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// Column classifier backed by platform function execution
///
/// # Example
///
/// ```no_run
/// use pii_profiler::adapters::classifier::{ColumnClassifier, ColumnRequest, HttpColumnClassifier};
/// use pii_profiler::config::load_config;
///
/// # async fn example() -> pii_profiler::domain::Result<()> {
/// let config = load_config("profiler.toml")?;
/// let classifier = HttpColumnClassifier::new(&config.classifier)?;
///
/// let request = ColumnRequest::from_csv("dni,email", None)?;
/// let analysis = classifier.classify_columns(&request).await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpColumnClassifier {
    base_url: Url,
    client: Client,
    api_token: SecretString,
    dataset_function: String,
    columns_function: String,
    preview: bool,
    retry: RetryConfig,
}

impl HttpColumnClassifier {
    /// Create a classifier from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Disabled`] if the classifier is not
    /// enabled, or a configuration error if the URL, token or HTTP client
    /// cannot be set up.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        if !config.enabled {
            return Err(ClassifierError::Disabled.into());
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ProfilerError::Configuration(format!(
                "Invalid classifier base_url '{}': {}",
                config.base_url, e
            ))
        })?;

        let api_token = config.api_token.clone().ok_or_else(|| {
            ProfilerError::Configuration("classifier.api_token is not set".to_string())
        })?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled for the classifier");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ProfilerError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
            api_token,
            dataset_function: config.dataset_function.clone(),
            columns_function: config.columns_function.clone(),
            preview: config.preview,
            retry: config.retry.clone(),
        })
    }

    /// Build the execution URL for a function
    fn execute_url(&self, function: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProfilerError::Configuration(format!(
                    "classifier.base_url '{}' cannot be a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v2", "functions", "queries", function, "execute"]);

        if self.preview {
            url.query_pairs_mut().append_pair("preview", "true");
        }
        Ok(url)
    }

    /// Execute a function once
    async fn execute_once(&self, url: &Url, body: &FunctionExecuteRequest) -> Result<String> {
        let response = self
            .client
            .post(url.clone())
            .bearer_auth(self.api_token.expose_secret().as_str())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout(e.to_string())
                } else {
                    ClassifierError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, text).into());
        }

        Ok(text)
    }

    /// Execute a function and decode its classification document
    async fn execute(&self, function: &str, body: FunctionExecuteRequest) -> Result<ColumnAnalysis> {
        let url = self.execute_url(function)?;
        tracing::debug!(function = function, preview = self.preview, "Executing classifier function");

        let text = self.retry_request(|| self.execute_once(&url, &body)).await?;
        let analysis = decode_envelope(&text)?.into_analysis()?;

        tracing::info!(
            function = function,
            columns = analysis.total_columns,
            critical = analysis.risk_summary().critical,
            high = analysis.risk_summary().high,
            "Column classification received"
        );
        Ok(analysis)
    }

    /// Retry a request with exponential backoff
    ///
    /// Only connection failures, timeouts and 5xx responses are retried.
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_attempts = self.retry.max_retries.max(1);
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;
                    let retryable =
                        matches!(&e, ProfilerError::Classifier(inner) if inner.is_retryable());
                    if !retryable || attempt >= max_attempts {
                        return Err(e);
                    }

                    let delay_ms = self.retry.delay_ms(attempt);
                    let reason = e.to_string();
                    log_retry_attempt!(attempt, max_attempts, reason.as_str());

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }
}

fn status_error(status: StatusCode, body: String) -> ClassifierError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ClassifierError::AuthenticationFailed(format!("status {status}: {body}"))
        }
        s if s.is_server_error() => ClassifierError::ServerError {
            status: s.as_u16(),
            message: body,
        },
        s => ClassifierError::ClientError {
            status: s.as_u16(),
            message: body,
        },
    }
}

#[async_trait]
impl ColumnClassifier for HttpColumnClassifier {
    async fn classify_dataset(&self, dataset_id: &DatasetId) -> Result<ColumnAnalysis> {
        if !dataset_id.is_resource_id() {
            return Err(ClassifierError::InvalidRequest(format!(
                "'{dataset_id}' is not a dataset resource id"
            ))
            .into());
        }

        tracing::info!(dataset_id = %dataset_id, "Classifying dataset columns");
        let body = FunctionExecuteRequest::new().with_param(DATASET_RID_PARAM, dataset_id.as_str());
        self.execute(&self.dataset_function, body).await
    }

    async fn classify_columns(&self, request: &ColumnRequest) -> Result<ColumnAnalysis> {
        tracing::info!(columns = request.len(), "Classifying column list");
        let body = FunctionExecuteRequest::new()
            .with_param(COLUMN_NAMES_PARAM, request.names_csv())
            .with_param(COLUMN_TYPES_PARAM, request.types_csv());
        self.execute(&self.columns_function, body).await
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn config(base_url: &str) -> ClassifierConfig {
        ClassifierConfig {
            enabled: true,
            base_url: base_url.to_string(),
            api_token: Some(secret_string("token".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_classifier_is_rejected() {
        let err = HttpColumnClassifier::new(&ClassifierConfig::default()).err().unwrap();
        assert!(matches!(err, ProfilerError::Classifier(ClassifierError::Disabled)));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let mut config = config("https://platform.example.com");
        config.api_token = None;
        let err = HttpColumnClassifier::new(&config).err().unwrap();
        assert!(matches!(err, ProfilerError::Configuration(_)));
    }

    #[test]
    fn test_execute_url() {
        let classifier = HttpColumnClassifier::new(&config("https://platform.example.com/")).unwrap();
        let url = classifier.execute_url("analizarColumnasPII").unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.example.com/api/v2/functions/queries/analizarColumnasPII/execute"
        );
    }

    #[test]
    fn test_execute_url_with_prefix_and_preview() {
        let mut config = config("https://platform.example.com/gateway");
        config.preview = true;
        let classifier = HttpColumnClassifier::new(&config).unwrap();
        let url = classifier.execute_url("fn").unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.example.com/gateway/api/v2/functions/queries/fn/execute?preview=true"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            ClassifierError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, String::new()),
            ClassifierError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, String::new()),
            ClassifierError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "missing".to_string()),
            ClassifierError::ClientError { status: 404, ref message } if message == "missing"
        ));
    }
}
