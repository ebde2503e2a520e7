// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{phrases, TranslationError};
use serde::Deserialize;
use std::collections::HashMap;
use std::rc::Rc;

/// Nested phrase tables, e.g. `{"Lumen": {"Common": {"newWindowAccessibilityHint": "..."}}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PhraseTree {
    Phrase(String),
    Group(HashMap<String, PhraseTree>),
}

impl PhraseTree {
    fn flatten_into(self, prefix: &str, out: &mut HashMap<String, String>) {
        match self {
            Self::Phrase(phrase) => {
                out.insert(prefix.to_owned(), phrase);
            }
            Self::Group(group) => {
                for (key, tree) in group {
                    let id = if prefix.is_empty() {
                        key
                    } else {
                        format!("{prefix}.{key}")
                    };
                    tree.flatten_into(&id, out);
                }
            }
        }
    }
}

/// Translation provider, passed to components that render localized text.
///
/// Phrases are looked up by dotted id. Ids missing from the loaded translations fall back to
/// the built-in English phrases, and then to the id itself.
#[derive(Clone, Debug)]
pub struct Translator {
    translations: Rc<HashMap<String, String>>,
}

thread_local! {
    /// Shared by every default translator, so default props compare equal.
    static BUILT_IN: Rc<HashMap<String, String>> = Rc::default();
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            translations: BUILT_IN.with(Rc::clone),
        }
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.translations, &other.translations)
    }
}

impl Translator {
    pub fn new(translations: HashMap<String, String>) -> Self {
        Self {
            translations: Rc::new(translations),
        }
    }

    /// Loads a nested JSON phrase tree, flattening it into dotted ids.
    pub fn from_json(json: &str) -> Result<Self, TranslationError> {
        let tree = serde_json::from_str::<PhraseTree>(json)?;
        if matches!(tree, PhraseTree::Phrase(_)) {
            return Err(TranslationError::NotAGroup);
        }
        let mut translations = HashMap::new();
        tree.flatten_into("", &mut translations);
        log::debug!("loaded {} translated phrases", translations.len());
        Ok(Self::new(translations))
    }

    pub fn has_key(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    pub fn translate(&self, id: &str) -> String {
        match self.lookup(id) {
            Some(phrase) => phrase.to_owned(),
            None => {
                log::warn!("missing translation for {id}");
                id.to_owned()
            }
        }
    }

    /// Like [`Self::translate`] but substitutes `{name}` placeholders.
    pub fn translate_with(
        &self,
        id: &str,
        replacements: &[(&str, &str)],
    ) -> Result<String, TranslationError> {
        let phrase = self.translate(id);
        let mut ret = String::with_capacity(phrase.len());
        let mut remaining = phrase.as_str();
        while let Some(start) = remaining.find('{') {
            let Some(len) = remaining[start..].find('}') else {
                break;
            };
            let name = &remaining[start + 1..start + len];
            let Some((_, to)) = replacements.iter().find(|(from, _)| *from == name) else {
                return Err(TranslationError::MissingReplacement {
                    id: id.to_owned(),
                    replacement: name.to_owned(),
                });
            };
            ret.push_str(&remaining[..start]);
            ret.push_str(to);
            remaining = &remaining[start + len + 1..];
        }
        ret.push_str(remaining);
        Ok(ret)
    }

    fn lookup(&self, id: &str) -> Option<&str> {
        self.translations
            .get(id)
            .map(String::as_str)
            .or_else(|| phrases::english(id))
    }
}
