use crate::anim::typewriter::{CURSOR_BLINK_MS, Typewriter, TypewriterConfig};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub texts: Vec<String>,
    #[prop_or_default]
    pub config: Option<TypewriterConfig>,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(TypewriterTextProps { texts, config }: &TypewriterTextProps) -> Html {
    let machine = {
        let texts = texts.clone();
        let config = config.unwrap_or_default();
        use_state(move || Typewriter::new(texts, config))
    };
    let cursor_visible = use_state(|| true);

    // One timer per step; the effect re-arms after every tick.
    {
        let handle = machine.clone();
        use_effect_with((*machine).clone(), move |current| {
            let timeout = current.next_delay().map(|delay| {
                let mut next = current.clone();
                Timeout::new(delay, move || {
                    next.tick();
                    handle.set(next);
                })
            });
            move || drop(timeout)
        });
    }

    {
        let handle = cursor_visible.clone();
        use_effect_with(*cursor_visible, move |&visible| {
            let timeout = Timeout::new(CURSOR_BLINK_MS, move || handle.set(!visible));
            move || drop(timeout)
        });
    }

    // Reserve room for the longest phrase so the layout does not jump.
    let min_width = texts
        .iter()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or_default();

    html! {
        <span class="typewriter" style={format!("min-width: {min_width}ch;")}>
            { machine.display() }
            <span
                class={classes!("typewriter-cursor", (!*cursor_visible).then_some("hidden"))}
                aria-hidden="true"
            >
                {"|"}
            </span>
        </span>
    }
}
