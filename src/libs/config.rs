//! Configuration management for the opshift application.
//!
//! Settings live in a JSON file in the platform data directory. The only
//! required section is the accounting identity: timer starts are refused
//! until the acting user maps to an employee. Board options are optional
//! and fall back to defaults.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The accounting identity of the acting user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmployeeConfig {
    pub id: i64,
    pub name: String,
}

/// Shift board display options.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// How far past the day boundary the carry-over rule looks, in hours.
    pub carry_over_lookahead_hours: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            carry_over_lookahead_hours: crate::libs::bucket::CARRY_OVER_LOOKAHEAD_HOURS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub employee: Option<EmployeeConfig>,
    pub board: Option<BoardConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when it does not
    /// exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard for the identity section.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;

        let current = config.employee.clone();
        let id: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeId.to_string())
            .with_initial_text(current.as_ref().map(|e| e.id.to_string()).unwrap_or_default())
            .interact_text()?;
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeName.to_string())
            .with_initial_text(current.map(|e| e.name).unwrap_or_default())
            .interact_text()?;

        config.employee = Some(EmployeeConfig { id, name: name.clone() });
        if config.board.is_none() {
            config.board = Some(BoardConfig::default());
        }

        msg_print!(Message::IdentityConfigured(name));
        Ok(config)
    }

    pub fn carry_over_lookahead_hours(&self) -> i64 {
        self.board
            .as_ref()
            .map(|board| board.carry_over_lookahead_hours)
            .unwrap_or(crate::libs::bucket::CARRY_OVER_LOOKAHEAD_HOURS)
    }
}
