use crate::content::Contact as ContactContent;
use crate::theme::ThemeContext;
use crate::util::color::{generate_color, neon};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactContent,
}

#[function_component(Contact)]
pub fn contact(ContactProps { contact }: &ContactProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");

    html! {
        <section id="contact" class="section section-contact">
            <h2 class="section-title">{"Get in touch"}</h2>
            if let Some(intro) = &contact.intro {
                <p class="contact-intro">{ intro }</p>
            }
            <ul class="contact-links">
                { for contact.links.iter().map(|link| {
                    let style = format!(
                        "background: {}; border-color: {};",
                        generate_color(&link.label, theme),
                        neon(&link.label)
                    );
                    html! {
                        <li key={link.url.clone()}>
                            <a class="contact-link glass" href={link.url.clone()} {style} target="_blank" rel="noopener noreferrer">
                                if let Some(icon) = &link.icon {
                                    <i class={icon.clone()} aria-hidden="true" />
                                }
                                <span>{ &link.label }</span>
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
