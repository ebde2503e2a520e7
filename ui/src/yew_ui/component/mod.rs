// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod icon;
mod icon_lockup;
mod link;
mod unstyled_link;

pub use icon::{Icon, IconProps};
pub use icon_lockup::{split_last_word, IconLockup, IconLockupProps, LastWordSplit};
pub use link::{link_classes, on_activate, Link, LinkProps, LinkVariant};
pub use unstyled_link::{UnstyledLink, UnstyledLinkProps};
