//! Help center: FAQ categories with a client-side search box.

use crate::components::AppShell;
use carpool_ui::content::{self, search_help, Faq, FaqCategory, PageBody};
use leptos::prelude::*;

#[component]
pub fn HelpPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let page = content::page(content::HELP);
    let categories: &'static [FaqCategory] = match page.map(|page| &page.body) {
        Some(PageBody::Help(categories)) => *categories,
        _ => &[],
    };

    let results = move || {
        let query = query.get();
        if query.trim().is_empty() {
            return None;
        }
        let matches = search_help(&query);
        Some(if matches.is_empty() {
            view! { <p class="text-sm text-gray-500">"No answers match your search."</p> }
                .into_any()
        } else {
            matches
                .into_iter()
                .map(|(category, faq)| view! { <FaqItem faq=faq category=category /> })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto space-y-8">
                <header class="space-y-2">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                        {page.map(|page| page.title)}
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">{page.map(|page| page.summary)}</p>
                </header>
                <input
                    type="search"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Search the help center"
                    on:input=move |event| set_query.set(event_target_value(&event))
                />
                <Show when=move || query.with(|query| query.trim().is_empty()) fallback=results>
                    {categories.iter().map(|category| view! { <FaqSection category=category /> }).collect_view()}
                </Show>
            </div>
        </AppShell>
    }
}

#[component]
fn FaqSection(category: &'static FaqCategory) -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{category.title}</h2>
            {category.faqs.iter().map(|faq| view! { <FaqItem faq=faq /> }).collect_view()}
        </section>
    }
}

#[component]
fn FaqItem(faq: &'static Faq, #[prop(optional)] category: Option<&'static str>) -> impl IntoView {
    view! {
        <details class="rounded-lg border border-gray-200 p-4 dark:border-gray-700">
            <summary class="cursor-pointer font-medium text-gray-900 dark:text-white">
                {faq.question}
            </summary>
            {category.map(|category| view! { <p class="mt-1 text-xs text-emerald-700">{category}</p> })}
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">{faq.answer}</p>
        </details>
    }
}
