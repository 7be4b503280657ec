use crate::content::ContactLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    #[prop_or_default]
    pub links: Vec<ContactLink>,
}

#[function_component(Footer)]
pub fn footer(FooterProps { owner, links }: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <ul class="footer-links">
                { for links.iter().map(|link| html! {
                    <li key={link.url.clone()}>
                        <a href={link.url.clone()} target="_blank" rel="noopener noreferrer" aria-label={link.label.clone()}>
                            if let Some(icon) = &link.icon {
                                <i class={icon.clone()} aria-hidden="true" />
                            } else {
                                { &link.label }
                            }
                        </a>
                    </li>
                }) }
            </ul>
            <p class="footer-copyright">{ format!("© {owner}. Built with Rust and Yew.") }</p>
        </footer>
    }
}
