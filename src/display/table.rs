use crate::api::models::{LinkStats, ShortenResult};
use crate::config::AppConfig;
use comfy_table::{Cell, Table, presets};
use serde_json::Value;

/// Formatter for operation results
pub struct ResultDisplay;

impl ResultDisplay {
    pub fn new() -> Self {
        Self
    }

    fn key_value_table(&self, rows: Vec<(&str, String)>) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_BORDERS_ONLY);
        for (key, value) in rows {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }
        table
    }

    /// Render a freshly shortened link with its basic stats
    pub fn render_shorten(&self, result: &ShortenResult) -> String {
        self.key_value_table(vec![
            ("Short URL", result.short_url.clone()),
            ("Original URL", result.original_url.clone()),
            ("ID", result.id.clone()),
            ("Created", result.created_at.to_rfc3339()),
            ("Clicks", result.clicks.to_string()),
        ])
        .to_string()
    }

    /// Render stored-link data for an existing short code
    pub fn render_stats(&self, stats: &LinkStats) -> String {
        self.key_value_table(vec![
            ("Original URL", stats.original_url.clone()),
            ("Short URL", stats.short_url.clone()),
            ("Clicks", stats.clicks.to_string()),
            ("Created", stats.created_at.to_rfc3339()),
        ])
        .to_string()
    }

    /// Analytics payloads have no fixed shape; pretty-print them as JSON
    pub fn render_analytics(&self, payload: &Value) -> String {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
    }

    /// Render the resolved configuration (API key shown only as presence)
    pub fn render_config(&self, config: &AppConfig) -> String {
        self.key_value_table(vec![
            ("App", format!("{} {}", config.app_name, config.app_version)),
            ("Environment", format!("{:?}", config.environment)),
            ("API URL", config.api_url.clone()),
            (
                "API key",
                if config.api_key.is_some() {
                    "configured".to_string()
                } else {
                    "not set".to_string()
                },
            ),
            ("Timeout", format!("{}ms", config.api_timeout.as_millis())),
            ("Retry attempts", config.api_retry_attempts.to_string()),
            ("Mock API", config.use_mock_api.to_string()),
            ("Analytics", config.enable_analytics.to_string()),
            ("Debug", config.enable_debug.to_string()),
            ("Dev tools", config.show_dev_tools.to_string()),
        ])
        .to_string()
    }
}

impl Default for ResultDisplay {
    fn default() -> Self {
        Self::new()
    }
}
