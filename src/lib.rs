pub mod configuration;
pub mod domain;
pub mod hubspot;
pub mod routes;
pub mod signup;
pub mod startup;
pub mod telemetry;
