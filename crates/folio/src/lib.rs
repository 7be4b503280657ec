pub mod anim;
pub mod app;
pub mod components;
pub mod content;
pub mod scroll;
pub mod theme;
pub mod util;
