use dioxus::prelude::*;
use types::User;

#[component]
pub fn FieldDashboard(user: User) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Field Dashboard" }
                p { class: "page-subtitle", "Welcome back, {user.display_name}." }
            }
            div { class: "dashboard-grid",
                div { class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Today's Route" }
                    p { class: "dashboard-card-desc",
                        "Sites on your schedule for today."
                    }
                }
                div { class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "My Visits" }
                    p { class: "dashboard-card-desc",
                        "Your recent visit reports."
                    }
                }
            }
        }
    }
}
