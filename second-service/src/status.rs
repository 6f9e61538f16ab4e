use chrono::{DateTime, Local};

/// Formats the service status line from configuration and host identity.
///
/// The hostname and start time are captured once at construction; every
/// answer from this service instance reports the same identity.
#[derive(Debug, Clone)]
pub struct StatusService {
    display_name: String,
    hostname: String,
    started_at: DateTime<Local>,
}

impl StatusService {
    pub fn new(display_name: Option<String>) -> Self {
        Self {
            display_name: display_name.unwrap_or_else(|| "not defined".to_string()),
            hostname: hostname(),
            started_at: Local::now(),
        }
    }

    pub fn status(&self, request_state: &str) -> String {
        format!(
            "SecondService ({}) on {} / {}, call state: {}",
            self.display_name,
            self.hostname,
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            request_state
        )
    }
}

fn hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown-host".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_includes_name_and_call_state() {
        let service = StatusService::new(Some("demo".to_string()));
        let status = service.status("http default");
        assert!(status.starts_with("SecondService (demo) on "));
        assert!(status.ends_with(", call state: http default"));
    }

    #[test]
    fn missing_name_falls_back_to_placeholder() {
        let service = StatusService::new(None);
        assert!(service.status("x").contains("(not defined)"));
    }
}
