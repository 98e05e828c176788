use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ComponentHealth {
    fn new(
        status: ComponentStatus,
        message: Option<String>,
        response_time_ms: Option<u64>,
    ) -> Self {
        Self {
            status,
            message,
            response_time_ms,
            last_checked: Utc::now(),
            details: None,
        }
    }

    pub fn healthy(response_time_ms: u64) -> Self {
        Self::new(ComponentStatus::Healthy, None, Some(response_time_ms))
    }

    pub fn degraded(message: String, response_time_ms: Option<u64>) -> Self {
        Self::new(ComponentStatus::Degraded, Some(message), response_time_ms)
    }

    pub fn unhealthy(error: String) -> Self {
        Self::new(ComponentStatus::Unhealthy, Some(error), None)
    }

    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// The overall status is the worst status of any component.
    pub fn add_component(&mut self, name: String, health: ComponentHealth) {
        self.status = self.status.max(health.status);
        self.components.insert(name, health);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ComponentStatus::Healthy
    }

    /// 503 only once a component is down; slow is still served.
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::OK,
        }
    }
}
