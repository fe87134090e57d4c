use lettermint::telemetry::{get_subscriber, init_subscriber};
use lettermint::{LettermintClient, LettermintSettings};
use once_cell::sync::Lazy;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialized once rather than for each test case
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_lvl = "info".to_string();
    let subscriber_name = "test".to_string();

    // Cannot assign the output of `get_subscriber` to a variable based on the value of `TEST_LOG`
    // because the sink is part of the type returned by `get_subscriber`, therefore they are not the
    // same type. To work around it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_lvl, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_lvl, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub email_server: MockServer,
    pub client: LettermintClient,
}

/// Spin up a mock Lettermint API in the background
/// Return it together with a client pointed at it
pub async fn spawn_app(email_whitelist: Vec<String>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // Next invocations get skipped
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let settings = LettermintSettings::new("lm_test_key")
        .with_base_url(email_server.uri())
        .with_email_whitelist(email_whitelist)
        .with_timeout_milliseconds(2_000);
    let client = LettermintClient::new(settings).expect("Failed to build the test client");

    TestApp {
        email_server,
        client,
    }
}

/// Parse the JSON body of a request the mock server received
pub fn body_json(request: &wiremock::Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("Received a non-JSON request body")
}
