use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

/// The env config env vars needed for scraping.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_draw_page_url")]
    draw_page_url: String,
    #[serde(default = "default_calendar_ids")]
    calendar_ids: String,
    #[serde(default = "default_clock_offset_hours")]
    clock_offset_hours: i64,
}

fn default_draw_page_url() -> String {
    "https://schwabmuenchen-lechfeld-buchloe.lions.de/buchloe".to_string()
}

fn default_calendar_ids() -> String {
    "2190,2172,2238,2221,2248".to_string()
}

// The draw table's dates run ahead of this host's clock by a fixed amount
// of unknown origin. The offset is applied to "now" before matching rows;
// changing it shifts which calendar day is considered current.
fn default_clock_offset_hours() -> i64 {
    1
}

pub struct ScrapingConfig {
    pub draw_page_url: String,
    pub calendar_ids: Vec<String>,
    pub clock_offset_hours: i64,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self {
            draw_page_url: scraping_env.draw_page_url,
            calendar_ids: parse_id_list(&scraping_env.calendar_ids),
            clock_offset_hours: scraping_env.clock_offset_hours,
        })
    }
}

/// Splits a comma-separated CALENDAR_IDS value into ticket IDs.
/// Pieces are trimmed; empty pieces (trailing commas etc.) are dropped.
fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
