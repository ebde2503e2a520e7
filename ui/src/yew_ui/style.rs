// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use stylist::yew::{styled_component, Global};
use yew::{html, Html};

pub const LINK_CLASS: &str = "Link";
/// Inherits the surrounding text color and adds an underline.
pub const MONOCHROME_CLASS: &str = "Link-monochrome";
/// Keeps the last word of an external link on the same line as its icon.
pub const ICON_LOCKUP_CLASS: &str = "Link-IconLockup";
pub const ICON_CLASS: &str = "Icon";
pub const VISUALLY_HIDDEN_CLASS: &str = "VisuallyHidden";

/// Mount once near the root of the app to style the class names above.
#[styled_component(LinkStylesheet)]
pub fn link_stylesheet() -> Html {
    let css = css!(
        r#"
        .Link {
            appearance: none;
            display: inline;
            text-align: inherit;
            padding: 0;
            background: none;
            border: 0;
            font-size: inherit;
            color: #2c6ecb;
            text-decoration: none;
            cursor: pointer;
        }

        .Link:hover {
            text-decoration: underline;
        }

        .Link.Link-monochrome {
            color: inherit;
            text-decoration: underline;
        }

        .Link-IconLockup {
            display: inline-block;
            white-space: nowrap;
        }

        .Link-IconLockup .Icon {
            display: inline-block;
            vertical-align: middle;
            margin-left: 0.125em;
        }

        .VisuallyHidden {
            position: absolute;
            width: 1px;
            height: 1px;
            overflow: hidden;
            clip: rect(0 0 0 0);
            white-space: nowrap;
        }
        "#
    );

    html! {
        <Global {css}/>
    }
}
