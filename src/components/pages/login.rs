use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

pub fn LoginPage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { loc!("Sign in") }
            Paragraph { style: TextStyle::Secondary,
                loc!("Use your account on this instance.")
            }
            input {
                r#type: "text",
                placeholder: "Username"
            }
            input {
                r#type: "password",
                placeholder: "Password"
            }
        }
    ))
}
