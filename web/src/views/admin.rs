use dioxus::prelude::*;
use types::User;

#[component]
pub fn AdminDashboard(user: User) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Admin Dashboard" }
                p { class: "page-subtitle", "Welcome back, {user.display_name}." }
            }
            div { class: "dashboard-grid",
                div { class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Representatives" }
                    p { class: "dashboard-card-desc",
                        "Field representative accounts and territory assignments."
                    }
                }
                div { class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Reports" }
                    p { class: "dashboard-card-desc",
                        "Visit reports submitted from the field."
                    }
                }
            }
        }
    }
}
