// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the trie dictionary.
//!
//! Misses (unknown word, unmatched prefix) are never errors; they surface as
//! `false` or empty results. The types here cover precondition violations
//! from the trie and everything that can fail around it: configuration,
//! word-list files and output serialisation.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::trie::TrieError;

pub mod config;

/// Result type alias used throughout the crate.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Core error enum for the trie dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Precondition violations reported by the trie.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// A word list could not be read.
    #[error("Failed to read word list {path:?}: {source}")]
    WordList {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when emitting JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: DictionaryError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: DictionaryError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter slot.
static ERROR_REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTER.write() = Some(reporter);
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output if no reporter is configured.
pub fn report_error(context: &ErrorContext) {
    match ERROR_REPORTER.read().as_ref() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
