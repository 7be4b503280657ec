use crate::content::{Certification, CertificationKind};
use crate::theme::ThemeContext;
use crate::util::color::{CardPalette, derive};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CertificationsProps {
    pub certifications: Vec<Certification>,
}

/// Courses and achievements in two tabs; clicking a card expands its details.
#[function_component(Certifications)]
pub fn certifications(CertificationsProps { certifications }: &CertificationsProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");
    let kind = use_state(CertificationKind::default);
    let selected = use_state(|| None::<usize>);

    let tab = |tab_kind: CertificationKind| {
        let onclick = {
            let kind = kind.clone();
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| {
                kind.set(tab_kind);
                selected.set(None);
            })
        };
        html! {
            <button
                class={classes!("tab", (*kind == tab_kind).then_some("tab-active"))}
                {onclick}
            >
                { tab_kind.to_string() }
            </button>
        }
    };

    let visible = certifications
        .iter()
        .enumerate()
        .filter(|(_, certification)| certification.kind == *kind);

    html! {
        <div class="certifications">
            <div class="tabs" role="tablist">
                { tab(CertificationKind::Course) }
                { tab(CertificationKind::Achievement) }
            </div>
            <div class="card-grid">
                { for visible.map(|(index, certification)| {
                    let is_selected = *selected == Some(index);
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| {
                            selected.set((!is_selected).then_some(index));
                        })
                    };
                    let palette = CardPalette::for_label(&certification.title, theme);
                    let issuer_style = format!("color: {};", derive(&certification.issuer, theme.toggled()));
                    html! {
                        <article
                            key={certification.title.clone()}
                            class={classes!("card", "certification-card", is_selected.then_some("selected"))}
                            style={palette.card_style()}
                            {onclick}
                        >
                            <h3>{ &certification.title }</h3>
                            <p class="certification-issuer" style={issuer_style}>{ &certification.issuer }</p>
                            if let Some(date) = &certification.date {
                                <p class="certification-date">{ date }</p>
                            }
                            if is_selected {
                                if let Some(description) = &certification.description {
                                    <p class="certification-description">{ description }</p>
                                }
                            }
                        </article>
                    }
                }) }
            </div>
        </div>
    }
}
