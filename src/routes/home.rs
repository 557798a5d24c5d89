//! src/routes/home.rs
use crate::domain::{Feature, FEATURES};
use crate::signup::SignupForm;
use actix_web::{http::header::ContentType, HttpResponse};
use htmlescape::encode_minimal;

const STYLE: &str = r#"
    body { margin: 0; font-family: system-ui, sans-serif; color: #fff; background: linear-gradient(#111827, #1f2937, #111827); }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; text-align: center; }
    .banner { background: linear-gradient(to right, #581c87, #312e81); padding: 5rem 0; }
    .banner h1 { font-size: 3.75rem; margin-bottom: 1.5rem; }
    .banner p { font-size: 1.5rem; max-width: 42rem; margin: 0 auto 2.5rem; }
    .cta { display: inline-block; padding: 0.75rem 2rem; border-radius: 9999px; background: #9333ea; color: #fff; text-decoration: none; }
    .features { padding: 5rem 0; }
    .features h2 { font-size: 2.25rem; color: #d8b4fe; margin-bottom: 4rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; text-align: left; }
    .feature { display: flex; gap: 1rem; padding: 1.5rem; background: #1f2937; border-radius: 0.5rem; }
    .feature .icon { font-size: 2rem; flex-shrink: 0; }
    .feature h3 { color: #d8b4fe; margin: 0 0 0.5rem; }
    .feature p { color: #d1d5db; margin: 0; }
    form { max-width: 32rem; margin: 0 auto; display: flex; gap: 1rem; }
    input[type=email] { flex-grow: 1; padding: 0.75rem 1rem; border: 0; border-radius: 9999px; font-size: 1.125rem; }
    button { padding: 0.75rem 2rem; border: 0; border-radius: 9999px; background: #9333ea; color: #fff; font-weight: 600; font-size: 1.125rem; }
    button:disabled { opacity: 0.5; }
    .signup-message { display: inline-block; margin-top: 1.5rem; padding: 1rem; border-radius: 0.5rem; background: #6b21a8; font-weight: 600; }
    footer { background: #111827; color: #d1d5db; padding: 2rem 0; }
"#;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(landing_page(&SignupForm::new()))
}

fn feature_card(feature: &Feature) -> String {
    format!(
        r#"<div class="feature">
                <div class="icon" data-icon="{icon_name}">{glyph}</div>
                <div>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            </div>"#,
        icon_name = feature.icon.name(),
        glyph = feature.icon.glyph(),
        title = encode_minimal(feature.title),
        description = encode_minimal(feature.description),
    )
}

/// Renders the whole page for the given signup state.
pub fn landing_page(form: &SignupForm) -> String {
    let features = FEATURES
        .iter()
        .map(feature_card)
        .collect::<Vec<_>>()
        .join("\n            ");

    let disabled = if form.submit_disabled() { " disabled" } else { "" };
    let button_label = if form.is_submitting() {
        "Submitting..."
    } else {
        "Get VIP Access"
    };
    let message_html = form
        .result_message()
        .map(|message| {
            format!(
                r#"<p class="signup-message">{}</p>"#,
                encode_minimal(message)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>OutDone</title>
    <style>{style}</style>
</head>
<body>
    <header class="banner">
        <div class="container">
            <h1>Your Crew's Complete Night Out Solution!</h1>
            <p>Effortless Planning, Exciting Experiences, and Memorable Moments Await!</p>
            <a href="#signup" class="cta">Join the VIP List</a>
        </div>
    </header>

    <section class="features">
        <div class="container">
            <h2>Your Group's Night, Perfected</h2>
            <div class="grid">
            {features}
            </div>
        </div>
    </section>

    <section id="signup" class="banner">
        <div class="container">
            <h2>Be a Group Night Out Pioneer</h2>
            <p>Get exclusive early access and be the first to revolutionize your group nights out. The future of partying with friends starts with you!</p>
            <form action="/signup" method="post">
                <input
                    type="email"
                    name="email"
                    placeholder="Your email address"
                    value="{email}"
                    required
                >
                <button type="submit"{disabled}>{button_label}</button>
            </form>
            {message_html}
        </div>
    </section>

    <footer>
        <div class="container">
            <p><i>Say goodbye to group chat chaos, split bills drama, and indecision paralysis!</i></p>
            <p>&copy; 2024 OutDone. All rights reserved.</p>
        </div>
    </footer>
</body>
</html>"##,
        style = STYLE,
        features = features,
        email = encode_minimal(form.email()),
        disabled = disabled,
        button_label = button_label,
        message_html = message_html,
    )
}
