// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Announced after the icon of a link that opens a new window.
pub const NEW_WINDOW_ACCESSIBILITY_HINT: &str = "Lumen.Common.newWindowAccessibilityHint";

/// Built-in English phrases, used when loaded translations lack an id.
pub(crate) fn english(id: &str) -> Option<&'static str> {
    Some(match id {
        NEW_WINDOW_ACCESSIBILITY_HINT => "(opens a new window)",
        _ => return None,
    })
}
