use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

use crate::errors::SensorError;

const CLIENT_TIMEOUT_DEFAULT: u64 = 5;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, SensorError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_DEFAULT))
            .build()
            .map_err(|e| SensorError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value, SensorError> {
        // Example of data returned by the device
        //  GET /accelerometer -> {"x": 1.2, "y": 2.3, "z": 3.4}
        //  GET /vibration     -> {"isVibrating": false}
        //  GET /location      -> {"latitude": 34.0522, "longitude": -118.2437}
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SensorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SensorError::Device(format!("{} returned {}", url, status)));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| SensorError::IncorrectDataFormat(e.to_string()))?;
        Ok(json)
    }
}
