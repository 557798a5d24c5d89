//! src/hubspot/client.rs
use reqwest::Client;
use serde::Serialize;

#[derive(Debug)]
pub struct FormsClient {
    pub http_client: Client,
    pub url: String,
}

impl FormsClient {
    /// Any non-2xx status comes back as an error, same as a transport failure.
    pub async fn submit<T>(&self, submission: &T) -> Result<reqwest::Response, reqwest::Error>
    where
        T: Serialize,
    {
        let res = self
            .http_client
            .post(&self.url)
            .header("content-type", "application/json")
            .json(submission)
            .send()
            .await?
            .error_for_status()?;

        Ok(res)
    }
}
