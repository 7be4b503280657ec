use super::carousel::{CarouselControls, use_carousel};
use crate::anim::carousel::Slot;
use crate::content::Project;
use crate::theme::ThemeContext;
use crate::util::color::{CardPalette, derive, neon};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
    pub in_view: bool,
}

#[function_component(Projects)]
pub fn projects(ProjectsProps { projects, in_view }: &ProjectsProps) -> Html {
    let carousel = use_carousel(projects.len(), *in_view);

    html! {
        <section id="projects" class="section section-projects">
            <h2 class="section-title">{"Projects"}</h2>
            <div class="carousel">
                { for projects.iter().enumerate().map(|(item, project)| {
                    let slot = carousel.slot_of(item);
                    html! {
                        <ProjectCard key={project.name.clone()} project={project.clone()} {slot} />
                    }
                }) }
            </div>
            <CarouselControls handle={carousel.clone()} label="project" />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    slot: Slot,
}

#[function_component(ProjectCard)]
fn project_card(ProjectCardProps { project, slot }: &ProjectCardProps) -> Html {
    let ThemeContext { theme, .. } =
        use_context::<ThemeContext>().expect("ThemeContext is provided by ThemeProvider");
    let palette = CardPalette::for_label(&project.name, theme);

    html! {
        <article
            class={classes!("card", "project-card", slot.css_class())}
            style={palette.card_style()}
            aria-hidden={(*slot != Slot::Current).then_some("true")}
        >
            <span class="project-category">{ &project.category }</span>
            <h3>{ &project.name }</h3>
            <p>{ &project.description }</p>
            if let Some(purpose) = &project.purpose {
                <p class="project-purpose">{ purpose }</p>
            }
            <ul class="badges">
                { for project.technologies.iter().map(|technology| {
                    let style = format!(
                        "background: {}; border-color: {};",
                        derive(technology, theme),
                        neon(technology)
                    );
                    html! { <li key={technology.clone()} class="badge" {style}>{ technology }</li> }
                }) }
            </ul>
            <div class="project-links">
                if let Some(demo) = &project.demo_url {
                    <a class="button" href={demo.clone()} target="_blank" rel="noopener noreferrer">{"Live demo"}</a>
                }
                if let Some(source) = &project.source_url {
                    <a class="button button-outline" href={source.clone()} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                }
            </div>
        </article>
    }
}
