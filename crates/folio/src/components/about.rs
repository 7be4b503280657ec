use super::typewriter::TypewriterText;
use crate::content::Owner;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub owner: Owner,
}

#[function_component(About)]
pub fn about(AboutProps { owner }: &AboutProps) -> Html {
    html! {
        <section id="about" class="section section-about">
            <div class="about-intro">
                <p class="about-greeting">{ &owner.headline }</p>
                <h1 class="about-name">{ &owner.name }</h1>
                if !owner.roles.is_empty() {
                    <h2 class="about-roles">
                        <TypewriterText texts={owner.roles.clone()} />
                    </h2>
                }
                { for owner.summary.iter().map(|paragraph| html! {
                    <p class="about-summary">{ paragraph }</p>
                }) }
            </div>
        </section>
    }
}
