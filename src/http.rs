use std::time::Duration;

use ureq::Agent;

/// Upper bound on every outbound request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP agent with the global request timeout applied.
/// Non-2xx statuses surface as `ureq::Error::StatusCode`.
pub fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .into()
}
