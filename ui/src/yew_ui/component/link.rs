// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{
    IconLockup, LinkContent, Translator, UnstyledLink, LINK_CLASS, MONOCHROME_CLASS,
    NEW_WINDOW_ACCESSIBILITY_HINT,
};
use web_sys::MouseEvent;
use yew::virtual_dom::AttrValue;
use yew::{classes, function_component, html, Callback, Classes, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct LinkProps {
    #[prop_or(None)]
    pub id: Option<AttrValue>,
    /// Without a url, the link renders as a button.
    #[prop_or(None)]
    pub url: Option<AttrValue>,
    #[prop_or_default]
    pub content: LinkContent,
    /// Use for links that open a different site.
    #[prop_or_default]
    pub external: bool,
    /// Makes the link color the same as the current text color and adds an underline.
    #[prop_or_default]
    pub monochrome: bool,
    #[prop_or(None)]
    pub on_click: Option<Callback<()>>,
    #[prop_or_default]
    pub translator: Translator,
}

/// What a [`Link`] renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkVariant {
    /// Delegates to [`UnstyledLink`].
    Navigable { url: AttrValue },
    /// A `<button>` styled like a link.
    Button,
}

impl LinkVariant {
    /// An empty url counts as no url.
    pub fn from_url(url: Option<&AttrValue>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Self::Navigable { url: url.clone() },
            _ => Self::Button,
        }
    }
}

pub fn link_classes(monochrome: bool) -> Classes {
    classes!(LINK_CLASS, monochrome.then_some(MONOCHROME_CLASS))
}

/// Adapts a zero-argument click handler to an event listener.
pub fn on_activate<E: 'static>(on_click: Option<&Callback<()>>) -> Option<Callback<E>> {
    on_click.map(|on_click| on_click.reform(|_: E| ()))
}

#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let class = link_classes(props.monochrome);
    let onclick = on_activate::<MouseEvent>(props.on_click.as_ref());

    let content = match props.content.as_text() {
        Some(text) if props.external => {
            let accessibility_label = props.translator.translate(NEW_WINDOW_ACCESSIBILITY_HINT);
            html! {
                <IconLockup text={text.clone()} {accessibility_label}/>
            }
        }
        _ => props.content.to_html(),
    };

    match LinkVariant::from_url(props.url.as_ref()) {
        LinkVariant::Navigable { url } => html! {
            <UnstyledLink
                {url}
                external={props.external}
                id={props.id.clone()}
                {class}
                {onclick}
            >
                {content}
            </UnstyledLink>
        },
        LinkVariant::Button => html! {
            <button type="button" id={props.id.clone()} {class} {onclick}>
                {content}
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ICON_LOCKUP_CLASS, VISUALLY_HIDDEN_CLASS};
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::{props, ServerRenderer};

    async fn render<F>(create_props: F) -> String
    where
        F: FnOnce() -> LinkProps + Send + 'static,
    {
        ServerRenderer::<Link>::with_props(create_props)
            .hydratable(false)
            .render()
            .await
    }

    fn lockup(word: &str) -> String {
        format!(r#"<span class="{ICON_LOCKUP_CLASS}">{word}<span class="Icon">"#)
    }

    #[test]
    fn variant_follows_url() {
        let url = AttrValue::from("https://example.com");
        assert_eq!(
            LinkVariant::from_url(Some(&url)),
            LinkVariant::Navigable { url: url.clone() }
        );
        assert_eq!(LinkVariant::from_url(None), LinkVariant::Button);
        assert_eq!(
            LinkVariant::from_url(Some(&AttrValue::from(""))),
            LinkVariant::Button
        );
    }

    #[test]
    fn monochrome_class() {
        assert_eq!(link_classes(false), classes!("Link"));
        assert_eq!(link_classes(true), classes!("Link", "Link-monochrome"));
        assert!(!link_classes(false).contains(MONOCHROME_CLASS));
        assert!(link_classes(true).contains(MONOCHROME_CLASS));
    }

    #[test]
    fn activation_calls_once() {
        let count = Rc::new(Cell::new(0));
        let on_click = {
            let count = Rc::clone(&count);
            Callback::from(move |()| count.set(count.get() + 1))
        };

        let onclick = on_activate::<()>(Some(&on_click)).unwrap();
        onclick.emit(());
        assert_eq!(count.get(), 1);
        onclick.emit(());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn activation_without_handler() {
        assert!(on_activate::<()>(None).is_none());
        assert!(on_activate::<MouseEvent>(None).is_none());
    }

    #[test]
    fn activation_adapts_to_mouse_events() {
        let on_click = Callback::from(|()| {});
        let onclick: Option<Callback<MouseEvent>> = on_activate(Some(&on_click));
        assert!(onclick.is_some());
    }

    #[test]
    fn default_props_compare_equal() {
        let a = props!(LinkProps {
            url: "/store",
            content: "Visit our store",
        });
        let b = props!(LinkProps {
            url: "/store",
            content: "Visit our store",
        });
        assert!(a == b);
    }

    #[tokio::test]
    async fn empty_url_renders_button() {
        let html = render(|| {
            props!(LinkProps {
                url: "",
                content: "Go",
            })
        })
        .await;

        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains(">Go</button>"), "{html}");
        assert!(!html.contains("href"), "{html}");
    }

    #[tokio::test]
    async fn url_renders_anchor() {
        let html = render(|| {
            props!(LinkProps {
                url: "https://example.com/store",
                content: "Visit our store",
                id: "store-link",
            })
        })
        .await;

        assert!(html.starts_with("<a"), "{html}");
        assert!(html.contains(r#"href="https://example.com/store""#), "{html}");
        assert!(html.contains(r#"id="store-link""#), "{html}");
        assert!(html.contains(r#"class="Link""#), "{html}");
        assert!(html.contains(">Visit our store</a>"), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }

    #[tokio::test]
    async fn no_url_renders_button() {
        let html = render(|| {
            props!(LinkProps {
                content: "Visit our store",
                on_click: Callback::from(|()| {}),
            })
        })
        .await;

        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains(r#"type="button""#), "{html}");
        assert!(html.contains(">Visit our store</button>"), "{html}");
        assert!(!html.contains("href"), "{html}");
    }

    #[tokio::test]
    async fn monochrome_rendered() {
        let html = render(|| {
            props!(LinkProps {
                content: "Visit our store",
                monochrome: true,
            })
        })
        .await;

        assert!(html.contains(r#"class="Link Link-monochrome""#), "{html}");
    }

    #[tokio::test]
    async fn internal_text_unchanged() {
        let html = render(|| {
            props!(LinkProps {
                url: "/store",
                content: "Visit our store now",
            })
        })
        .await;

        assert!(html.contains(">Visit our store now</a>"), "{html}");
        assert!(!html.contains(ICON_LOCKUP_CLASS), "{html}");
    }

    #[tokio::test]
    async fn external_text_decorated() {
        let html = render(|| {
            props!(LinkProps {
                url: "https://example.com/store",
                content: "Visit our store now",
                external: true,
            })
        })
        .await;

        assert!(html.contains(r#"target="_blank""#), "{html}");
        assert!(html.contains(&format!("Visit our store {}", lockup("now"))), "{html}");
        assert!(html.contains("<svg"), "{html}");
        assert!(
            html.contains(&format!(
                r#"<span class="{VISUALLY_HIDDEN_CLASS}">(opens a new window)</span>"#
            )),
            "{html}"
        );
    }

    #[tokio::test]
    async fn external_button_decorated() {
        let html = render(|| {
            props!(LinkProps {
                content: "Visit our store now",
                external: true,
            })
        })
        .await;

        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains(&format!("Visit our store {}", lockup("now"))), "{html}");
    }

    #[tokio::test]
    async fn external_single_word() {
        let html = render(|| {
            props!(LinkProps {
                url: "https://example.com/store",
                content: "Storefront",
                external: true,
            })
        })
        .await;

        // The whole text stays outside the lockup, which holds only the icon.
        assert!(html.contains(&format!("Storefront{}", lockup(""))), "{html}");
        assert_eq!(html.matches("Storefront").count(), 1, "{html}");
    }

    #[tokio::test]
    async fn external_markup_unchanged() {
        let html = render(|| {
            props!(LinkProps {
                url: "https://example.com/store",
                content: html! { <strong>{"Visit our store now"}</strong> },
                external: true,
            })
        })
        .await;

        assert!(html.contains("<strong>Visit our store now</strong>"), "{html}");
        assert!(!html.contains(ICON_LOCKUP_CLASS), "{html}");
        assert!(!html.contains("<svg"), "{html}");
    }

    #[tokio::test]
    async fn injected_translator() {
        let html = render(|| {
            props!(LinkProps {
                url: "https://example.com/store",
                content: "Besuchen Sie unseren Laden",
                external: true,
                translator: Translator::from_json(
                    r#"{"Lumen": {"Common": {"newWindowAccessibilityHint": "(öffnet ein neues Fenster)"}}}"#,
                )
                .unwrap(),
            })
        })
        .await;

        assert!(html.contains(&format!("Besuchen Sie unseren {}", lockup("Laden"))), "{html}");
        assert!(html.contains("(öffnet ein neues Fenster)"), "{html}");
        assert!(!html.contains("(opens a new window)"), "{html}");
    }
}
