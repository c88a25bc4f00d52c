use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "clock.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    pub rtc: RtcConfig,
    pub time: TimeConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Ds3231,
    Ds1307,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtcConfig {
    /// Chip family the board carries. Must match the driver marker.
    pub chip: ChipKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Offset of the time kept in the RTC from UTC
    pub timezone_offset_hours: i32,
}

impl ChipKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChipKind::Ds3231 => "DS3231",
            ChipKind::Ds1307 => "DS1307",
        }
    }
}

impl ClockConfig {
    pub fn load() -> anyhow::Result<Self> {
        // Try external file first
        if Path::new(CONFIG_FILE).exists() {
            let config = Self::load_from(CONFIG_FILE)?;
            log::info!("Loaded configuration from {}", CONFIG_FILE);
            Ok(config)
        } else {
            // Fallback to embedded defaults
            let config = Self::from_toml_str(include_str!("../clock.toml.example"))?;
            log::warn!("Using embedded default configuration");
            Ok(config)
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config_content = fs::read_to_string(path)?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: ClockConfig = toml::from_str(content)?;
        let offset = config.time.timezone_offset_hours;
        anyhow::ensure!(
            (-23..=23).contains(&offset),
            "timezone offset {} is out of range",
            offset
        );
        Ok(config)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let config_content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), config_content)?;
        log::info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn get_timezone_offset(&self) -> i32 {
        self.time.timezone_offset_hours
    }

    pub fn get_chip(&self) -> ChipKind {
        self.rtc.chip
    }
}
