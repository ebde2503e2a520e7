// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use web_sys::MouseEvent;
use yew::virtual_dom::AttrValue;
use yew::{function_component, html, Callback, Children, Classes, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct UnstyledLinkProps {
    pub url: AttrValue,
    /// Opens in a new window, without handing the opener to the destination.
    #[prop_or_default]
    pub external: bool,
    #[prop_or(None)]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(None)]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// An anchor with navigation semantics and no styling of its own.
#[function_component(UnstyledLink)]
pub fn unstyled_link(props: &UnstyledLinkProps) -> Html {
    let target = props.external.then_some(AttrValue::Static("_blank"));
    let rel = props
        .external
        .then_some(AttrValue::Static("noopener noreferrer"));

    html! {
        <a
            href={props.url.clone()}
            id={props.id.clone()}
            class={props.class.clone()}
            {target}
            {rel}
            onclick={props.onclick.clone()}
        >
            {props.children.clone()}
        </a>
    }
}
