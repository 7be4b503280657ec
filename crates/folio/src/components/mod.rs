pub mod about;
pub mod carousel;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod footer;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod typewriter;
