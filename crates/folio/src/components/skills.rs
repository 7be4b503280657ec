use super::certifications::Certifications;
use crate::content::{Certification, Language, Skill, Skills as SkillsContent};
use crate::theme::ThemeContext;
use crate::util::color::{CardPalette, glow, soft_tint};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
enum SkillTab {
    #[strum(to_string = "Soft Skills")]
    Soft,
    #[strum(to_string = "Technical Skills")]
    Technical,
    #[strum(to_string = "Technical Languages")]
    Languages,
    #[strum(to_string = "Certifications")]
    Certifications,
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: SkillsContent,
    #[prop_or_default]
    pub certifications: Vec<Certification>,
}

#[function_component(Skills)]
pub fn skills(
    SkillsProps {
        skills,
        certifications,
    }: &SkillsProps,
) -> Html {
    use strum::IntoEnumIterator as _;

    let active = use_state(|| SkillTab::Soft);

    let tab_button = |tab: SkillTab| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(tab))
        };
        let label = tab.to_string();
        let style = format!("--tab-tint: {};", soft_tint(&label));
        html! {
            <button
                key={label.clone()}
                class={classes!("tab", (*active == tab).then_some("tab-active"))}
                {style}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let panel = match *active {
        SkillTab::Soft => skill_grid(&skills.soft),
        SkillTab::Technical => skill_grid(&skills.technical),
        SkillTab::Languages => html! { <LanguageGrid languages={skills.languages.clone()} /> },
        SkillTab::Certifications => {
            html! { <Certifications certifications={certifications.clone()} /> }
        }
    };

    html! {
        <section id="skills" class="section section-skills">
            <h2 class="section-title">{"Skills"}</h2>
            <div class="tabs" role="tablist">
                { for SkillTab::iter().map(tab_button) }
            </div>
            <div class="tab-panel" role="tabpanel">{ panel }</div>
        </section>
    }
}

fn skill_grid(skills: &[Skill]) -> Html {
    html! {
        <div class="card-grid">
            { for skills.iter().map(|skill| html! {
                <SkillCard key={skill.name.clone()} skill={skill.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    skill: Skill,
}

#[function_component(SkillCard)]
fn skill_card(SkillCardProps { skill }: &SkillCardProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");
    let palette = CardPalette::for_label(&skill.name, theme);

    html! {
        <article class="card skill-card" style={palette.card_style()}>
            <div class="card-overlay" />
            <div class="card-content">
                if let Some(icon) = &skill.icon {
                    <i class={classes!(icon.clone(), "card-icon")} aria-hidden="true" />
                }
                <h3>{ &skill.name }</h3>
                <p>{ &skill.description }</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct LanguageGridProps {
    languages: Vec<Language>,
}

#[function_component(LanguageGrid)]
fn language_grid(LanguageGridProps { languages }: &LanguageGridProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");

    html! {
        <div class="card-grid">
            { for languages.iter().map(|language| {
                let palette = CardPalette::for_label(&language.name, theme);
                let fill = format!(
                    "width: {}%; background: linear-gradient(90deg, {}, var(--progress-end));",
                    language.proficiency,
                    glow(&language.name)
                );
                html! {
                    <article key={language.name.clone()} class="card language-card" style={palette.card_style()}>
                        <div class="card-overlay" />
                        <div class="card-content">
                            <header class="card-header">
                                if let Some(icon) = &language.icon {
                                    <i class={classes!(icon.clone(), "card-icon")} aria-hidden="true" />
                                }
                                <h3>{ &language.name }</h3>
                            </header>
                            <p>{ &language.description }</p>
                            <div
                                class="progress"
                                role="progressbar"
                                aria-valuenow={language.proficiency.to_string()}
                                aria-valuemin="0"
                                aria-valuemax="100"
                                aria-label={format!("{} proficiency", language.name)}
                            >
                                <div class="progress-fill" style={fill} />
                            </div>
                            <span class="progress-text">
                                { format!("{}% proficiency", language.proficiency) }
                            </span>
                        </div>
                    </article>
                }
            }) }
        </div>
    }
}
