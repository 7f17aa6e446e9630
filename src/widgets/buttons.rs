use dioxus::prelude::*;

#[derive(Props)]
pub struct IconButtonProps<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

/// A bare icon control, as used all over the navigation bar.
pub fn IconButton<'a>(cx: Scope<'a, IconButtonProps<'a>>) -> Element<'a> {
    let class = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "icon-button {class}", title: "{cx.props.title}",
            button {
                r#type: "button",
                onclick: move |e| cx.props.onclick.call(e),
                dangerous_inner_html: cx.props.icon
            }
        }
    ))
}

#[derive(Props)]
pub struct TextButtonProps<'a> {
    pub text: &'a str,
    pub title: &'a str,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn TextButton<'a>(cx: Scope<'a, TextButtonProps<'a>>) -> Element<'a> {
    let class = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "text-button {class}", title: "{cx.props.title}",
            button {
                r#type: "button",
                onclick: move |e| cx.props.onclick.call(e),
                "{cx.props.text}"
            }
        }
    ))
}
