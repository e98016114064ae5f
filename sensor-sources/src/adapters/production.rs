// Reads the current value of one sensor from a device exposing a JSON REST API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

use common::types::SensorKind;

use crate::errors::SensorError;
use crate::http_client::HttpClient;
use crate::ports::SensorReader;

/// Reader fetching `GET {base_url}/{sensor}` and decoding the body into `R`.
pub struct HttpSensorReader<R> {
    client: Arc<HttpClient>,
    kind: SensorKind,
    path: String,
    _reading: PhantomData<fn() -> R>,
}

impl<R> HttpSensorReader<R> {
    /// Creates a reader with its own HTTP client.
    /// Returns a ClientBuild error if the Http client cannot be created
    pub fn new(base_url: &str, kind: SensorKind) -> Result<Self, SensorError> {
        let client = Arc::new(HttpClient::new(base_url)?);
        Ok(Self::with_client(client, kind))
    }

    pub(crate) fn with_client(client: Arc<HttpClient>, kind: SensorKind) -> Self {
        Self {
            client,
            kind,
            path: format!("/{}", kind.as_str()),
            _reading: PhantomData,
        }
    }
}

#[async_trait]
impl<R> SensorReader<R> for HttpSensorReader<R>
where
    R: DeserializeOwned + Send + 'static,
{
    fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Returns the decoded reading.
    /// # Errors
    /// - Transport if the device can't be reached
    /// - Device if the device answers with a non-success status
    /// - IncorrectDataFormat if the body doesn't match the reading format
    async fn read(&self) -> Result<R, SensorError> {
        let json = self.client.fetch_json(&self.path).await?;
        serde_json::from_value(json).map_err(|e| {
            log::debug!("Unexpected {} payload: {}", self.kind, e);
            SensorError::IncorrectDataFormat(e.to_string())
        })
    }
}
