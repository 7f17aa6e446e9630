#![allow(non_snake_case)]

mod app;
mod components;
mod environment;
mod helper;
mod icons;
mod style;
mod widgets;

pub use app::run;

/// Where the client's own code lives. Linked from the sidebar.
pub const SOURCE_URL: &str = "https://github.com/takibi-app/takibi";

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
