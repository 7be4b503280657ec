//! Light/dark presentation mode.
//!
//! The active [`Theme`] lives in the root component's state and reaches the
//! rest of the tree through [`ThemeContext`]. Nothing reads it from a global.
//!
//! ```rust,ignore
//! let ThemeContext { theme, .. } = use_context::<ThemeContext>().unwrap();
//! let accent = derive("Rust", theme);
//! ```

use log::debug;
use serde::Deserialize;
use yew::prelude::*;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Glyph shown on the toggle knob: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Current theme plus the only way to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub initial: Theme,
    pub children: Children,
}

/// Owns the theme state and exposes it as [`ThemeContext`].
#[function_component(ThemeProvider)]
pub fn theme_provider(ThemeProviderProps { initial, children }: &ThemeProviderProps) -> Html {
    let theme = use_state(|| *initial);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = theme.toggled();
            debug!("Switching theme from {} to {next}", *theme);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            <div class={classes!("theme-root", theme.css_class())}>
                { children.clone() }
            </div>
        </ContextProvider<ThemeContext>>
    }
}
