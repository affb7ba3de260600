/* packages/cli/core/src/telemetry.rs */

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::build::Telemetry;
use crate::config::TelemetrySection;
use crate::project::{DbProvider, ProjectConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEvent {
  pub event: &'static str,
  pub db_provider: DbProvider,
  pub list_count: usize,
  pub field_count: usize,
  pub os: &'static str,
  pub cli_version: &'static str,
}

impl BuildEvent {
  pub fn new(event: &'static str, config: &ProjectConfig) -> Self {
    Self {
      event,
      db_provider: config.db.provider,
      list_count: config.lists.len(),
      field_count: config.field_count(),
      os: std::env::consts::OS,
      cli_version: env!("CARGO_PKG_VERSION"),
    }
  }
}

/// Posts events on a detached task; the response is never awaited by the build.
#[derive(Debug, Clone)]
pub struct HttpTelemetry {
  client: reqwest::Client,
  endpoint: String,
}

impl HttpTelemetry {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), endpoint: endpoint.into() }
  }
}

impl Telemetry for HttpTelemetry {
  fn send(&self, event: &BuildEvent) -> Result<()> {
    let runtime =
      tokio::runtime::Handle::try_current().context("telemetry needs a running tokio runtime")?;
    let request =
      self.client.post(&self.endpoint).timeout(Duration::from_secs(3)).json(event);
    runtime.spawn(async move {
      let _ = request.send().await;
    });
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
  fn send(&self, _event: &BuildEvent) -> Result<()> {
    Ok(())
  }
}

pub fn telemetry_from_settings(settings: &TelemetrySection) -> Box<dyn Telemetry> {
  if settings.disabled {
    Box::new(NoopTelemetry)
  } else {
    Box::new(HttpTelemetry::new(settings.endpoint.clone()))
  }
}
