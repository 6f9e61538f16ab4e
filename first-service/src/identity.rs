use chrono::{DateTime, Local};

/// FirstService's own identity, captured once at startup.
#[derive(Debug, Clone)]
pub struct Identity {
    display_name: String,
    hostname: String,
    started_at: DateTime<Local>,
}

impl Identity {
    pub fn new(display_name: Option<String>) -> Self {
        Self {
            display_name: display_name.unwrap_or_else(|| "not defined".to_string()),
            hostname: std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown-host".to_string()),
            started_at: Local::now(),
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "FirstService ({}) on {} / {}",
            self.display_name,
            self.hostname,
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
