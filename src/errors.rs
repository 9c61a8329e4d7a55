// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures talking to the finance API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
