use crate::components::AppShell;
use carpool_ui::{
    content::{self, Block, PageBody},
    paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Overview of the ride types on offer.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let page = content::page(content::SERVICES);
    let blocks: &'static [Block] = match page.map(|page| &page.body) {
        Some(PageBody::Services(blocks)) => *blocks,
        _ => &[],
    };

    view! {
        <AppShell>
            <div class="max-w-4xl mx-auto space-y-8">
                <header class="space-y-2 text-center">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                        {page.map(|page| page.title)}
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">{page.map(|page| page.summary)}</p>
                </header>
                <div class="grid gap-6 md:grid-cols-2">
                    {blocks.iter().map(|block| view! { <BlockCard block=block /> }).collect_view()}
                </div>
                <p class="text-center">
                    <A href=paths::REGISTER {..} class="font-medium text-emerald-600 hover:underline">
                        "Create a free account to book your first ride"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}

/// Titled card shared by the informational pages.
#[component]
pub fn BlockCard(block: &'static Block) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 p-6 dark:border-gray-700">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{block.title}</h2>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">{block.description}</p>
        </div>
    }
}
