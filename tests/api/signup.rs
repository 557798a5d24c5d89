//! tests/api/signup.rs

use crate::helpers::{email_input_value, setup, setup_with_unreachable_hubspot, SUBMIT_PATH};
use outdone::signup::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn signup_forwards_the_email_to_hubspot() {
    // Arrange
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "fields": [{ "name": "email", "value": "a@b.com" }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.hubspot_server)
        .await;

    // Act
    let response = test.post_signup("a@b.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn signup_shows_thanks_and_clears_the_email_on_success() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.hubspot_server)
        .await;

    // Act
    let response = test.post_signup("a@b.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(SUCCESS_MESSAGE));
    assert!(page.contains("Thanks for signing up! 🎉"));
    assert_eq!("", email_input_value(&page));
    assert!(page.contains(r#"<button type="submit">Get VIP Access</button>"#));
}

#[tokio::test]
async fn signup_shows_the_failure_message_and_keeps_the_email_on_error_status() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.hubspot_server)
        .await;

    // Act
    let response = test.post_signup("bad@site.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains("Oops! There was a problem. Please try again."));
    assert_eq!("bad@site.com", email_input_value(&page));
    assert!(page.contains(r#"<button type="submit">Get VIP Access</button>"#));
}

#[tokio::test]
async fn signup_treats_every_non_2xx_status_the_same() {
    // Arrange
    let test = setup().await;

    for status in [400, 403, 404, 503] {
        let _mock_guard = Mock::given(any())
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount_as_scoped(&test.hubspot_server)
            .await;

        // Act
        let page = test.post_signup("a@b.com").await.text().await.unwrap();

        // Assert
        assert!(
            page.contains(FAILURE_MESSAGE),
            "No failure message when HubSpot returned {}",
            status
        );
    }
}

#[tokio::test]
async fn signup_shows_the_same_failure_message_when_hubspot_is_unreachable() {
    // Arrange
    let address = setup_with_unreachable_hubspot().await;

    // Act
    let response = reqwest::Client::new()
        .post(&format!("{}/signup", address))
        .form(&[("email", "a@b.com")])
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(FAILURE_MESSAGE));
    assert_eq!("a@b.com", email_input_value(&page));
}

#[tokio::test]
async fn signup_can_be_repeated_after_success() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&test.hubspot_server)
        .await;

    // Act
    let first = test.post_signup("a@b.com").await;
    let second = test.post_signup("a@b.com").await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn signup_returns_a_400_when_email_is_invalid() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // Nothing should reach HubSpot
        .expect(0)
        .mount(&test.hubspot_server)
        .await;

    let test_cases = vec![("email=", "empty email"), ("email=notanemail", "invalid email")];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post("/signup", body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn signup_re_renders_the_form_when_email_is_invalid() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post("/signup", "email=notanemail".into()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert_eq!("notanemail", email_input_value(&page));
    assert!(!page.contains(r#"<p class="signup-message">"#));
}

#[tokio::test]
async fn signup_returns_a_400_when_email_is_missing() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post("/signup", "".into()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn signup_strips_surrounding_whitespace_before_forwarding() {
    // Arrange
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(body_json(serde_json::json!({
            "fields": [{ "name": "email", "value": "a@b.com" }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.hubspot_server)
        .await;

    // Act
    let response = test.post_signup("  a@b.com ").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(SUCCESS_MESSAGE));
}
