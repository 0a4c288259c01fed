use dioxus::prelude::*;

mod gate;
mod views;

use gate::{DashboardKind, Gate};
use views::{AdminDashboard, FieldDashboard, Login, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "FieldOps" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// The route gate. Everything under this layout requires a session.
#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;

    let state = user.read();
    match Gate::from_query((*state).as_ref()) {
        Gate::Ready(session) => {
            let user = session.user;
            let initial = user
                .display_name
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();

            rsx! {
                div { class: "app-layout",
                    header { class: "topbar",
                        span { class: "topbar-logo", "FieldOps" }
                        div { class: "topbar-user",
                            div { class: "topbar-avatar", "{initial}" }
                            div { class: "topbar-user-info",
                                div { class: "topbar-user-name", "{user.display_name}" }
                                div { class: "topbar-user-role", "{user.role}" }
                            }
                            a { href: "/auth/logout", rel: "external", class: "topbar-logout", "Sign out" }
                        }
                    }
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Gate::SignedOut => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        Gate::Pending => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}

/// The landing route re-queries the current user and picks a dashboard by
/// role.
#[component]
fn Home() -> Element {
    let user = use_server_future(api::get_current_user)?;

    let state = user.read();
    match Gate::from_query((*state).as_ref()) {
        Gate::Ready(session) => match DashboardKind::for_user(&session.user) {
            DashboardKind::Admin => rsx! {
                AdminDashboard { user: session.user }
            },
            DashboardKind::FieldRep => rsx! {
                FieldDashboard { user: session.user }
            },
        },
        Gate::SignedOut => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        Gate::Pending => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
