use super::carousel::{CarouselControls, use_carousel};
use crate::content::EducationEntry;
use crate::theme::ThemeContext;
use crate::util::color::CardPalette;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EducationProps {
    pub entries: Vec<EducationEntry>,
    /// Auto-advance only runs while the section is on screen.
    pub in_view: bool,
}

/// Timeline of schools, shown as a carousel with the neighbours peeking in.
#[function_component(Education)]
pub fn education(EducationProps { entries, in_view }: &EducationProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");
    let carousel = use_carousel(entries.len(), *in_view);

    html! {
        <section id="education" class="section section-education">
            <h2 class="section-title">{"Education"}</h2>
            <div class="carousel">
                { for entries.iter().enumerate().map(|(item, entry)| {
                    let palette = CardPalette::for_label(&entry.institution, theme);
                    html! {
                        <article
                            key={entry.institution.clone()}
                            class={classes!("card", "education-card", carousel.slot_of(item).css_class())}
                            style={palette.card_style()}
                        >
                            <h3>{ &entry.degree }</h3>
                            <p class="education-institution">{ &entry.institution }</p>
                            <p class="education-period">{ &entry.period }</p>
                            if let Some(details) = &entry.details {
                                <p class="education-details">{ details }</p>
                            }
                        </article>
                    }
                }) }
            </div>
            <CarouselControls handle={carousel.clone()} label="school" />
        </section>
    }
}
