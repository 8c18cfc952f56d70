mod bundle;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use render::{t, tr};

/// Build an argument map for [`tr`].
#[macro_export]
macro_rules! targs {
    ($($key:literal => $value:expr),* $(,)?) => {{
        let mut map = ::std::collections::BTreeMap::<&str, &str>::new();
        $( map.insert($key, $value); )*
        map
    }};
}
