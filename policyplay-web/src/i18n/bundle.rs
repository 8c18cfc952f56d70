use serde_json::Value;
use std::cell::RefCell;

const EN: &str = include_str!("../../i18n/en.json");

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let raw = match lang {
        "en" => EN,
        _ => return None,
    };
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("locale {lang} is not valid JSON: {err}");
            None
        }
    }
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    Some(I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)?,
    })
}

fn fallback_bundle() -> I18nBundle {
    I18nBundle {
        lang: "en".to_string(),
        translations: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle("en").unwrap_or_else(fallback_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language. Unknown codes keep the current bundle.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("no translations for {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_loads() {
        let bundle = build_bundle("en").expect("bundle should load");
        assert!(bundle.translations.is_object());
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn unknown_language_keeps_current() {
        set_lang("xx");
        assert_eq!(current_lang(), "en");
    }
}
