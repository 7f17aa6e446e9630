#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

use crate::components::shell::ShellApp;
use crate::environment::{Environment, Model, Repository};
use crate::style::STYLE;

/// The instance we point fresh installs at until they sign in somewhere.
const DEFAULT_INSTANCE: &str = "https://gnusocial.net";

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let style = STYLE;
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Takibi</title>
        <style>{style}</style>
        "#
        ))
        .with_window(default_window());

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

fn default_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Takibi")
        .with_inner_size(LogicalSize::new(680., 760.))
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let repository = use_state(cx, Repository::new);

    let environment_state = use_state(cx, || {
        let model = match repository.session() {
            Some(session) => Model::new(session.instance_url),
            None => Model::new(DEFAULT_INSTANCE.to_string()),
        };
        Environment::new(model, repository.get().clone())
    });

    cx.render(rsx! {
        ShellApp {
            environment: environment_state
        }
    })
}
