//! Theme toggle component.

use crate::components::atoms::icons::{IconVariant, MoonIcon, SunIcon};
use crate::core::theme::{
    DARK_CLASS, DEFAULT_THEME_KEY, ThemeMode, ThemeSource, ToggleSize, toggle_theme,
};
use crate::services::storage::BrowserStore;
use gloo::console;
use gloo::utils::document;
use yew::prelude::*;

const BUTTON_BASE: &str =
    "relative flex items-center justify-center rounded-full focus:outline-none dark:focus:ring-blue-400";

/// Theme toggle configuration.
#[derive(Properties, PartialEq, Eq)]
pub struct ThemeToggleProps {
    /// Mode used when nothing valid is stored.
    #[prop_or_default]
    pub default_theme: ThemeMode,
    /// `localStorage` key holding the preference.
    #[prop_or(AttrValue::from(DEFAULT_THEME_KEY))]
    pub storage_key: AttrValue,
    /// Button size.
    #[prop_or_default]
    pub size: ToggleSize,
    /// Extra classes for the button.
    #[prop_or_default]
    pub class: Classes,
}

/// Round button that flips between light and dark and remembers the choice.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let source = {
        let key = props.storage_key.to_string();
        let fallback = props.default_theme;
        use_mut_ref(move || ThemeSource::new(key, fallback))
    };
    let theme = {
        let source = source.clone();
        use_state(move || source.borrow().load(&BrowserStore))
    };

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |(key, fallback)| {
                if source.borrow_mut().retarget(key, *fallback) {
                    theme.set(source.borrow().load(&BrowserStore));
                }
                || ()
            },
            (props.storage_key.clone(), props.default_theme),
        );
    }
    use_effect_with_deps(
        move |mode| {
            apply_theme(*mode);
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        let key = props.storage_key.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(&BrowserStore, &key, *theme).unwrap_or_else(|(next, err)| {
                console::error!("theme preference not saved", err.to_string());
                next
            });
            theme.set(next);
        })
    };

    let mode = *theme;
    let class = classes!(
        BUTTON_BASE,
        props.size.classes(),
        if mode.is_dark() {
            "bg-gray-700 hover:bg-gray-600"
        } else {
            "bg-gray-100 hover:bg-gray-200"
        },
        "transition-colors",
        "duration-200",
        props.class.clone(),
    );

    html! {
        <button
            type="button"
            class={class}
            aria-label={format!("Switch to {} mode", mode.switch_label())}
            {onclick}
        >
            {match mode {
                ThemeMode::Light => html! {
                    <MoonIcon class="h-4 w-4 text-gray-800 dark:text-gray-400" variant={IconVariant::Solid} />
                },
                ThemeMode::Dark => html! {
                    <SunIcon class="h-4 w-4 text-gray-800 dark:text-gray-400" variant={IconVariant::Solid} />
                },
            }}
        </button>
    }
}

fn apply_theme(mode: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let outcome = if mode.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(err) = outcome {
        console::error!("theme class update failed", err);
    }
}
