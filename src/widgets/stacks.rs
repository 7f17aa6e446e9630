use dioxus::prelude::*;

#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    stack(cx, "vstack")
}

pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    stack(cx, "hstack")
}

fn stack<'a>(cx: Scope<'a, StackProps<'a>>, axis: &'static str) -> Element<'a> {
    let custom_cls = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "{axis} {custom_cls}", &cx.props.children }
    ))
}
