// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod error;
mod phrases;
mod translator;

pub use self::error::TranslationError;
pub use self::phrases::NEW_WINDOW_ACCESSIBILITY_HINT;
pub use self::translator::Translator;
