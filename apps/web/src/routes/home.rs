//! Landing page. Signed-in riders get a shortcut to their dashboard.

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use carpool_ui::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const CTA_CLASS: &str = "inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-emerald-700 rounded-lg hover:bg-emerald-800 focus:ring-4 focus:outline-none focus:ring-emerald-300";
const SECONDARY_CLASS: &str = "inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.user()
            .map(|user| format!("Good to see you, {}.", user.display_name()))
    };

    view! {
        <AppShell>
            <section class="max-w-2xl mx-auto text-center space-y-6 py-12">
                <h1 class="text-4xl font-extrabold text-gray-900 dark:text-white">
                    "Share the ride, split the cost"
                </h1>
                <p class="text-lg text-gray-500 dark:text-gray-400">
                    "Find drivers heading your way or fill the empty seats in your car."
                </p>
                {move || greeting().map(|text| view! { <p class="font-medium text-emerald-700">{text}</p> })}
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <A href=paths::REGISTER {..} class=CTA_CLASS>"Get started"</A>
                                <A href=paths::LOGIN {..} class=SECONDARY_CLASS>"Sign in"</A>
                            }
                        }
                    >
                        <A href=paths::DASHBOARD {..} class=CTA_CLASS>"Go to dashboard"</A>
                    </Show>
                    <A href=paths::SERVICES {..} class=SECONDARY_CLASS>"Our services"</A>
                </div>
            </section>
        </AppShell>
    }
}
