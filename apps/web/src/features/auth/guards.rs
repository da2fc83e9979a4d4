use crate::features::auth::state::use_auth;
use carpool_ui::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders its children only for a signed-in user and sends everyone else to
/// the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            // UX-only guard; the API enforces access with the bearer token.
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}
