// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use yew::html::IntoPropValue;
use yew::virtual_dom::{VNode, VText};
use yew::{AttrValue, Html};

/// Displayable content of a link. Only [`LinkContent::Text`] is eligible for decoration.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkContent {
    Text(AttrValue),
    Markup(Html),
}

impl Default for LinkContent {
    fn default() -> Self {
        Self::Markup(Html::default())
    }
}

impl LinkContent {
    pub fn as_text(&self) -> Option<&AttrValue> {
        match self {
            Self::Text(text) => Some(text),
            Self::Markup(_) => None,
        }
    }

    pub fn to_html(&self) -> Html {
        match self {
            Self::Text(text) => VNode::VText(VText::new(text.clone())),
            Self::Markup(markup) => markup.clone(),
        }
    }
}

impl From<&'static str> for LinkContent {
    fn from(text: &'static str) -> Self {
        Self::Text(AttrValue::Static(text))
    }
}

impl From<String> for LinkContent {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<AttrValue> for LinkContent {
    fn from(text: AttrValue) -> Self {
        Self::Text(text)
    }
}

impl From<Html> for LinkContent {
    fn from(markup: Html) -> Self {
        Self::Markup(markup)
    }
}

macro_rules! impl_into_link_content {
    ($($from: ty),*) => {
        $(
            impl IntoPropValue<LinkContent> for $from {
                fn into_prop_value(self) -> LinkContent {
                    self.into()
                }
            }
        )*
    };
}

impl_into_link_content!(&'static str, String, AttrValue, Html);
