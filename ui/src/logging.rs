// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Routes `log` records to the browser console. Call once, before rendering.
pub fn init_console_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}
