use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub store_commands_total: IntCounterVec,
    pub unread_notifications: IntGauge,
    pub auth_requests_total: IntCounterVec,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let store_commands_total = IntCounterVec::new(
            Opts::new("store_commands_total", "Store commands by command and outcome"),
            &["command", "outcome"],
        )
        .expect("valid store_commands_total metric");

        let unread_notifications =
            IntGauge::new("unread_notifications", "Current number of unread notifications")
                .expect("valid unread_notifications metric");

        let auth_requests_total = IntCounterVec::new(
            Opts::new("auth_requests_total", "Auth requests by route and outcome"),
            &["route", "outcome"],
        )
        .expect("valid auth_requests_total metric");

        registry
            .register(Box::new(store_commands_total.clone()))
            .expect("register store_commands_total");
        registry
            .register(Box::new(unread_notifications.clone()))
            .expect("register unread_notifications");
        registry
            .register(Box::new(auth_requests_total.clone()))
            .expect("register auth_requests_total");

        Self {
            registry,
            store_commands_total,
            unread_notifications,
            auth_requests_total,
        }
    }

    pub fn record_command(&self, command: &str, applied: bool) {
        let outcome = if applied { "applied" } else { "noop" };
        self.store_commands_total
            .with_label_values(&[command, outcome])
            .inc();
    }

    pub fn record_auth(&self, route: &str, outcome: &str) {
        self.auth_requests_total
            .with_label_values(&[route, outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
