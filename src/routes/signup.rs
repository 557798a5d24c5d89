//! src/routes/signup.rs
use crate::domain::EmailError;
use crate::hubspot::HubSpot;
use crate::routes::{error_chain_fmt, landing_page};
use crate::signup::SignupForm;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct SignupData {
    pub email: String,
}

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("The submitted email was rejected")]
    InvalidEmail {
        form: SignupForm,
        #[source]
        source: EmailError,
    },
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::InvalidEmail { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SignupError::InvalidEmail { form, .. } => HttpResponse::build(self.status_code())
                .content_type(ContentType::html())
                .body(landing_page(form)),
        }
    }
}

/// Both outcomes of the HubSpot call render the page with a 200: the message
/// on the page is the only thing that tells them apart.
#[tracing::instrument(
    name = "Signing up for early access",
    skip(form, hubspot),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_email = %form.email
    )
)]
pub async fn signup(
    form: web::Form<SignupData>,
    hubspot: web::Data<HubSpot>,
) -> Result<HttpResponse, SignupError> {
    let mut signup_form = SignupForm::with_email(form.into_inner().email);

    let result = signup_form.submit(&hubspot).await;
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(source) => {
            return Err(SignupError::InvalidEmail {
                form: signup_form,
                source,
            })
        }
    };
    tracing::info!(?outcome, "Signup attempt settled");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(landing_page(&signup_form)))
}
