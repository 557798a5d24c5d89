//! src/startup.rs
use crate::configuration::Settings;
use crate::hubspot::HubSpot;
use crate::routes::{health_check, home, signup};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let hubspot = HubSpot::from(config.hubspot);
    tracing::info!(port, hubspot_url = %hubspot.url(), "Starting landing page server");

    let server = run(tcp_listener, hubspot)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener, hubspot: HubSpot) -> Result<Server, std::io::Error> {
    let hubspot = web::Data::new(hubspot);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(home))
            .route("/signup", web::post().to(signup))
            .app_data(hubspot.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
