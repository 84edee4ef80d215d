//! Unified application error type.
//! Every module (core, cli, config, ui) returns AppError so operator-facing
//! failures can be matched in one place by the session loop.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Operator input closed")]
    InputClosed,

    // ---------------------------
    // Roster
    // ---------------------------
    #[error("Не вдалося відкрити файл групи: {path} ({reason})")]
    ResourceUnavailable { path: String, reason: String },

    #[error("Файл групи порожній: {0}")]
    EmptyRoster(String),

    // ---------------------------
    // Operator input
    // ---------------------------
    #[error("Невірний вибір: {0}")]
    InvalidMenuChoice(String),

    #[error("Невірний день: {0}")]
    InvalidDaySelection(String),

    #[error("Невірний формат часу: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True for errors the session reports and then exits cleanly on.
    pub fn is_roster_missing(&self) -> bool {
        matches!(
            self,
            AppError::ResourceUnavailable { .. } | AppError::EmptyRoster(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
