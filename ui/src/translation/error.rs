// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("invalid translation json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("translations must be a JSON object of phrases")]
    NotAGroup,
    #[error("no replacement found for `{replacement}` in phrase `{id}`")]
    MissingReplacement { id: String, replacement: String },
}
