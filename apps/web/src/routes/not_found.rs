//! 404 page for unknown routes.

use crate::components::AppShell;
use carpool_ui::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">"404"</h1>
                <p class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
                <p class="text-gray-500 dark:text-gray-400 max-w-sm">
                    "This road does not lead anywhere. Check the address or head back home."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-emerald-700 rounded-lg hover:bg-emerald-800"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=paths::HELP
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600"
                    >
                        "Visit the help center"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
