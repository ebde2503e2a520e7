// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Design-system components for Yew applications.

#[cfg(feature = "console")]
mod logging;
mod translation;
mod yew_ui;

// Export `pub` symbols below. Remaining symbols are effectively `pub(crate)`.
#[cfg(feature = "console")]
pub use self::logging::*;
pub use self::translation::*;
pub use self::yew_ui::*;

// Re-export the icon set so callers can name icon sources.
pub use yew_icons::IconId;
