//! Response models for the info endpoints, plus the collectors that compute
//! them. Every snapshot is rebuilt from scratch on each request; nothing in
//! this module is cached.

use std::net::IpAddr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sysinfo::System;
use utoipa::ToSchema;

use crate::uptime::Uptime;

// ========================================
// MODELS
// ========================================

/// Fixed identity of this service.
#[derive(Serialize, ToSchema)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub framework: String,
}

/// Host facts, freshly queried from the operating environment.
#[derive(Serialize, ToSchema)]
pub struct SystemSnapshot {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

/// Process facts derived from the start time and the current clock.
#[derive(Serialize, ToSchema)]
pub struct RuntimeSnapshot {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String, // ISO-8601 UTC, Z suffix
    pub timezone: String,
}

/// Facts about the request being answered.
#[derive(Serialize, ToSchema)]
pub struct RequestSnapshot {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

/// Static self-description of one route.
#[derive(Serialize, ToSchema)]
pub struct EndpointDescriptor {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Full payload of `GET /`.
#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: ServiceDescriptor,
    pub system: SystemSnapshot,
    pub runtime: RuntimeSnapshot,
    pub request: RequestSnapshot,
    pub endpoints: Vec<EndpointDescriptor>,
}

/// Payload of `GET /health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

// ========================================
// COLLECTORS
// ========================================

/// Current UTC time as ISO-8601 with microsecond precision and `Z` suffix.
pub fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn service_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        name: "devops-info-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "DevOps course info service".to_string(),
        framework: "Rust (axum)".to_string(),
    }
}

/// Queries host facts from the OS. Fields that cannot be determined come back
/// as `"unknown"` (or 0 for the CPU count) rather than failing the request.
pub fn system_snapshot() -> SystemSnapshot {
    let mut sys = System::new();
    sys.refresh_cpu_all();

    SystemSnapshot {
        hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
        platform: System::name().unwrap_or_else(|| "unknown".to_string()),
        platform_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
        architecture: std::env::consts::ARCH.to_string(),
        cpu_count: sys.cpus().len(),
        rust_version: env!("INFO_SERVICE_RUSTC_VERSION").to_string(),
    }
}

pub fn runtime_snapshot(started_at: DateTime<Utc>) -> RuntimeSnapshot {
    let uptime = Uptime::since(started_at);
    RuntimeSnapshot {
        uptime_seconds: uptime.seconds,
        uptime_human: uptime.human,
        current_time: utc_now_iso(),
        timezone: "UTC".to_string(),
    }
}

pub fn request_snapshot(
    client_ip: Option<IpAddr>,
    user_agent: Option<&str>,
    method: &str,
    path: &str,
) -> RequestSnapshot {
    RequestSnapshot {
        client_ip: client_ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        user_agent: user_agent.unwrap_or("unknown").to_string(),
        method: method.to_string(),
        path: path.to_string(),
    }
}

/// The service's own route catalog, returned by `GET /` for discoverability.
pub fn endpoint_catalog() -> Vec<EndpointDescriptor> {
    [
        ("/", "Service information"),
        ("/health", "Health check"),
        ("/docs", "API documentation"),
        ("/openapi.json", "OpenAPI schema"),
    ]
    .into_iter()
    .map(|(path, description)| EndpointDescriptor {
        path: path.to_string(),
        method: "GET".to_string(),
        description: description.to_string(),
    })
    .collect()
}
