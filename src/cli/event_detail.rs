//! Event detail mode: print a single event and exit.

use std::io;

use eventlens::{EventLensConfig, EventsGateway, ListingError};

use super::output::write_event_detail_to;

/// Fetches the configured event id and prints it.
///
/// # Errors
///
/// Returns an error if no event id is configured, the event does not exist,
/// the request fails, or stdout cannot be written.
pub async fn run(config: &EventLensConfig) -> Result<(), ListingError> {
    let gateway = super::build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with(config, gateway.as_ref(), &mut stdout).await
}

/// Runs the detail mode against an explicit gateway and writer.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with<W: io::Write>(
    config: &EventLensConfig,
    gateway: &dyn EventsGateway,
    writer: &mut W,
) -> Result<(), ListingError> {
    let id = config.event_id.ok_or_else(|| ListingError::Configuration {
        message: "event id is required (use --event-id)".to_owned(),
    })?;
    tracing::debug!(id, "loading event");

    let item = gateway.get_event(id).await?;
    write_event_detail_to(writer, &item)
}

#[cfg(test)]
mod tests {
    use eventlens::ReqwestEventsGateway;
    use eventlens::api::GatewaySettings;
    use eventlens::api::models::test_support::{ONCOLOGY_TITLE, seeded_events};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn gateway_for(server: &MockServer) -> ReqwestEventsGateway {
        ReqwestEventsGateway::new(&GatewaySettings::new(server.uri()))
            .expect("gateway should build")
    }

    #[tokio::test]
    async fn prints_the_requested_event() {
        let server = MockServer::start().await;
        let oncology = seeded_events().remove(2);
        Mock::given(method("GET"))
            .and(path("/api/events/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&oncology))
            .mount(&server)
            .await;
        let config = EventLensConfig {
            event_id: Some(3),
            ..Default::default()
        };
        let mut buffer = Vec::new();

        run_with(&config, &gateway_for(&server), &mut buffer)
            .await
            .expect("detail should succeed");

        let output = String::from_utf8(buffer).expect("output should be UTF-8");
        assert!(output.starts_with(ONCOLOGY_TITLE));
    }

    #[tokio::test]
    async fn reports_missing_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/events/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let config = EventLensConfig {
            event_id: Some(99),
            ..Default::default()
        };
        let mut buffer = Vec::new();

        let result = run_with(&config, &gateway_for(&server), &mut buffer).await;

        assert_eq!(result, Err(ListingError::NotFound { id: 99 }));
    }
}
