//! How drivers get verified and what they gain from it.

use super::services::BlockCard;
use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use carpool_ui::{
    content::{self, Block, PageBody},
    paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DriverVerificationPage() -> impl IntoView {
    let auth = use_auth();
    let page = content::page(content::DRIVER_VERIFICATION);
    let (steps, benefits): (&'static [Block], &'static [Block]) =
        match page.map(|page| &page.body) {
            Some(PageBody::DriverVerification { steps, benefits }) => (*steps, *benefits),
            _ => (&[], &[]),
        };

    let numbered = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            view! {
                <li class="flex gap-4">
                    <span class="flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-emerald-100 font-semibold text-emerald-700">
                        {index + 1}
                    </span>
                    <div>
                        <h3 class="font-semibold text-gray-900 dark:text-white">{step.title}</h3>
                        <p class="text-sm text-gray-600 dark:text-gray-300">{step.description}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto space-y-10">
                <header class="space-y-2 text-center">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                        {page.map(|page| page.title)}
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">{page.map(|page| page.summary)}</p>
                </header>
                <section class="space-y-4">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"How it works"</h2>
                    <ol class="space-y-4">{numbered}</ol>
                </section>
                <section class="space-y-4">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Why verify"</h2>
                    <div class="grid gap-4 md:grid-cols-3">
                        {benefits.iter().map(|block| view! { <BlockCard block=block /> }).collect_view()}
                    </div>
                </section>
                <p class="text-center">
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <A href=paths::REGISTER {..} class="font-medium text-emerald-600 hover:underline">
                                    "Sign up to start driving"
                                </A>
                            }
                        }
                    >
                        <A href=paths::DASHBOARD {..} class="font-medium text-emerald-600 hover:underline">
                            "Start your verification from the dashboard"
                        </A>
                    </Show>
                </p>
            </div>
        </AppShell>
    }
}
