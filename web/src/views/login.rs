use dioxus::prelude::*;

#[component]
pub fn Login(error: Option<String>) -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "FieldOps" }
                    p { class: "login-subtitle", "Field operations portal" }
                }
                if error.is_some() {
                    div { class: "alert alert-error", "Wrong username or password." }
                }
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            name: "username",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. jsmith",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
