//! Unified application error type.
//! All modules (config, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    #[error("Invalid mark '{0}': expected ID=present|late|absent")]
    InvalidMark(String),

    #[error("Invalid scan '{0}': expected TAG or TAG@HH:MM")]
    InvalidScan(String),

    // ---------------------------
    // Session / dataset errors
    // ---------------------------
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown RFID reader: {0}")]
    UnknownReader(String),

    #[error("Invalid roster data: {0}")]
    Roster(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
