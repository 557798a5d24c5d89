//! src/hubspot/mod.rs
use crate::configuration::HubSpotSettings;
use crate::domain::SubscriberEmail;
use reqwest::Client;

mod client;
use client::FormsClient;

mod submission;
pub use submission::{Field, Submission, SubmissionBuilder};

/// Forwards signups to a single HubSpot form.
#[derive(Debug)]
pub struct HubSpot {
    forms_client: FormsClient,
}

impl HubSpot {
    pub fn new(base_url: &str, portal_id: &str, form_id: &str) -> Self {
        let forms_client = FormsClient {
            http_client: Client::new(),
            url: submit_url(base_url, portal_id, form_id),
        };

        Self { forms_client }
    }

    pub fn url(&self) -> &str {
        &self.forms_client.url
    }

    #[tracing::instrument(name = "Submitting email to HubSpot", skip(self, email), fields(url = %self.url()))]
    pub async fn submit_email(&self, email: &SubscriberEmail) -> Result<(), reqwest::Error> {
        let submission = Submission::builder().field("email", email.as_ref()).build();

        self.forms_client.submit(&submission).await?;
        Ok(())
    }
}

impl From<HubSpotSettings> for HubSpot {
    fn from(settings: HubSpotSettings) -> Self {
        Self::new(&settings.base_url, &settings.portal_id, &settings.form_id)
    }
}

fn submit_url(base_url: &str, portal_id: &str, form_id: &str) -> String {
    format!(
        "{}/submissions/v3/integration/submit/{}/{}",
        base_url.trim_end_matches('/'),
        portal_id,
        form_id
    )
}
