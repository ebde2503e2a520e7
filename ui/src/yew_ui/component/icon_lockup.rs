// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{Icon, ICON_LOCKUP_CLASS};
use yew::virtual_dom::AttrValue;
use yew::{function_component, html, Html, Properties};
use yew_icons::IconId;

/// Text split at its last space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastWordSplit<'a> {
    /// Everything up to and including the last space.
    pub rest: &'a str,
    /// Everything after the last space, or `None` if there is no space.
    pub last_word: Option<&'a str>,
}

/// Without a space, all of `text` is `rest` and there is no last word.
pub fn split_last_word(text: &str) -> LastWordSplit<'_> {
    match text.rfind(' ') {
        Some(index) => {
            let (rest, last_word) = text.split_at(index + 1);
            LastWordSplit {
                rest,
                last_word: Some(last_word),
            }
        }
        None => LastWordSplit {
            rest: text,
            last_word: None,
        },
    }
}

#[derive(PartialEq, Properties)]
pub struct IconLockupProps {
    pub text: AttrValue,
    pub accessibility_label: AttrValue,
    #[prop_or(IconId::BootstrapBoxArrowUpRight)]
    pub source: IconId,
}

/// Renders `text` with an icon glued to its last word, so the icon never wraps onto a line
/// of its own.
#[function_component(IconLockup)]
pub fn icon_lockup(props: &IconLockupProps) -> Html {
    let LastWordSplit { rest, last_word } = split_last_word(&props.text);

    html! {
        <>
            {rest.to_owned()}
            <span class={ICON_LOCKUP_CLASS}>
                if let Some(last_word) = last_word {
                    {last_word.to_owned()}
                }
                <Icon source={props.source} accessibility_label={props.accessibility_label.clone()}/>
            </span>
        </>
    }
}
