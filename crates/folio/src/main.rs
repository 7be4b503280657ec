use folio::{
    app::{App, AppProps, LoadError, LoadErrorProps},
    content,
};
use log::error;
use std::rc::Rc;

fn main() {
    init_logging();
    match content::load() {
        Ok(portfolio) => {
            yew::Renderer::<App>::with_props(AppProps {
                portfolio: Rc::new(portfolio),
            })
            .render();
        }
        Err(err) => {
            error!("Cannot load portfolio content: {err:?}");
            yew::Renderer::<LoadError>::with_props(LoadErrorProps {
                message: format!("{err:#}").into(),
            })
            .render();
        }
    }
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
