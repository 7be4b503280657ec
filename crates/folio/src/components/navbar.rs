use crate::content::SectionLink;
use crate::scroll::tracker::ScrollState;
use crate::theme::ThemeContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: AttrValue,
    pub sections: Vec<SectionLink>,
    pub scroll: ScrollState,
    /// Scrolls to the given section id.
    pub on_select: Callback<String>,
}

/// Fixed navigation bar with the scroll-spy underline, theme switch and mobile menu.
#[function_component(NavBar)]
pub fn nav_bar(
    NavBarProps {
        brand,
        sections,
        scroll,
        on_select,
    }: &NavBarProps,
) -> Html {
    let ThemeContext { theme, toggle } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");
    let expanded = use_state(|| false);

    let link = |section: &SectionLink| {
        let is_active = section.id == scroll.active_section;
        let onclick = {
            let id = section.id.clone();
            let on_select = on_select.clone();
            let expanded = expanded.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                expanded.set(false);
                on_select.emit(id.clone());
            })
        };
        html! {
            <li key={section.id.clone()}>
                <a
                    href={format!("#{}", section.id)}
                    class={classes!("nav-link", is_active.then_some("active-nav-link"))}
                    aria-current={is_active.then_some("true")}
                    {onclick}
                >
                    { &section.label }
                </a>
            </li>
        }
    };

    let on_brand = {
        let on_select = on_select.clone();
        let first = sections.first().map(|section| section.id.clone());
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(first) = &first {
                on_select.emit(first.clone());
            }
        })
    };
    let on_hamburger = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let on_toggle_theme = Callback::from(move |_: MouseEvent| toggle.emit(()));

    html! {
        <nav class={classes!("navbar", scroll.scrolled().then_some("navbar-scrolled"))}>
            <a class="navbar-brand" href="#" onclick={on_brand}>{ brand.to_string() }</a>
            <button
                class={classes!("navbar-toggle", expanded.then_some("open"))}
                aria-label="Toggle navigation"
                aria-expanded={expanded.to_string()}
                onclick={on_hamburger}
            >
                <span class="hamburger-line" />
                <span class="hamburger-line" />
                <span class="hamburger-line" />
            </button>
            <ul class={classes!("nav-links", expanded.then_some("nav-links-expanded"))}>
                { for sections.iter().map(link) }
            </ul>
            <button
                class="theme-toggle"
                aria-label={format!("Switch to {} theme", theme.toggled())}
                onclick={on_toggle_theme}
            >
                <span class="theme-toggle-knob">{ theme.toggle_icon() }</span>
            </button>
        </nav>
    }
}
