// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod component;
mod content;
mod style;

pub use component::*;
pub use content::LinkContent;
pub use style::*;
