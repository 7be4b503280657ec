use crate::{
    components::{
        about::About, contact::Contact, education::Education, footer::Footer, navbar::NavBar,
        projects::Projects, skills::Skills,
    },
    content::Portfolio,
    scroll::dom::use_scroll_spy,
    theme::ThemeProvider,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(App)]
pub fn app(AppProps { portfolio }: &AppProps) -> Html {
    html! {
        <ThemeProvider initial={portfolio.theme}>
            <Page portfolio={portfolio.clone()} />
        </ThemeProvider>
    }
}

#[function_component(Page)]
fn page(AppProps { portfolio }: &AppProps) -> Html {
    let spy = use_scroll_spy(
        portfolio.section_ids(),
        portfolio.default_section().to_owned(),
    );
    let has = |id: &str| portfolio.sections.iter().any(|section| section.id == id);
    let in_view = |id: &str| spy.state.active_section == id;

    html! {
        <>
            <NavBar
                brand={portfolio.owner.name.clone()}
                sections={portfolio.sections.clone()}
                scroll={spy.state.clone()}
                on_select={spy.select.clone()}
            />
            <main class="page">
                if has("about") {
                    <About owner={portfolio.owner.clone()} />
                }
                if has("education") {
                    <Education entries={portfolio.education.clone()} in_view={in_view("education")} />
                }
                if has("skills") {
                    <Skills
                        skills={portfolio.skills.clone()}
                        certifications={portfolio.certifications.clone()}
                    />
                }
                if has("projects") {
                    <Projects projects={portfolio.projects.clone()} in_view={in_view("projects")} />
                }
                if has("contact") {
                    <Contact contact={portfolio.contact.clone()} />
                }
            </main>
            <Footer owner={portfolio.owner.name.clone()} links={portfolio.contact.links.clone()} />
        </>
    }
}

#[derive(PartialEq, Properties)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Rendered instead of the page when the bundled content is unusable.
#[function_component(LoadError)]
pub fn load_error(LoadErrorProps { message }: &LoadErrorProps) -> Html {
    html! {
        <div class="load-error" role="alert">
            <h1>{"The portfolio could not be loaded"}</h1>
            <pre>{ message.to_string() }</pre>
        </div>
    }
}
