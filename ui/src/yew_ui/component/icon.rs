// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{ICON_CLASS, VISUALLY_HIDDEN_CLASS};
use yew::virtual_dom::AttrValue;
use yew::{function_component, html, Html, Properties};
use yew_icons::{Icon as SvgIcon, IconId};

#[derive(PartialEq, Properties)]
pub struct IconProps {
    pub source: IconId,
    /// Read by assistive technologies in place of the icon.
    #[prop_or(None)]
    pub accessibility_label: Option<AttrValue>,
    #[prop_or("1em".into())]
    pub size: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={ICON_CLASS}>
            <SvgIcon
                icon_id={props.source}
                width={props.size.clone()}
                height={props.size.clone()}
            />
            if let Some(label) = props.accessibility_label.clone() {
                <span class={VISUALLY_HIDDEN_CLASS}>{label}</span>
            }
        </span>
    }
}
