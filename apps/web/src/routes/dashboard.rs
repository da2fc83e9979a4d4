//! Signed-in summary: ride statistics and recent activity. A rejected token
//! signs the user out and returns them to the login page.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::{
    account::client,
    auth::{state::use_auth, RequireAuth},
};
use carpool_ui::{
    flows::dashboard::{activity_label, stat_tiles, DASHBOARD_FAILED},
    types::DashboardResponse,
    MountGuard,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Ready(DashboardResponse),
    Failed(String),
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (load, set_load) = signal(Load::Loading);
    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.teardown()
    });

    Effect::new(move |_| {
        if let Some(route) = redirect.get() {
            navigate(route, Default::default());
        }
    });

    if let Some(token) = auth.token() {
        spawn_local(async move {
            let result = client::dashboard(&token).await;
            guard.run(|| match result {
                Ok(dashboard) => set_load.set(Load::Ready(dashboard)),
                Err(err) => match auth.handle_failure(&err) {
                    Some(route) => set_redirect.set(Some(route)),
                    None => set_load.set(Load::Failed(err.user_message(DASHBOARD_FAILED))),
                },
            });
        });
    }

    let name = move || {
        auth.user()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                "Welcome back, " {name}
            </h1>
            {move || match load.get() {
                Load::Loading => view! { <Spinner /> }.into_any(),
                Load::Failed(message) => {
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Load::Ready(dashboard) => view! { <DashboardView dashboard=dashboard /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DashboardView(dashboard: DashboardResponse) -> impl IntoView {
    let tiles = stat_tiles(&dashboard.stats)
        .into_iter()
        .map(|tile| {
            view! {
                <div class="rounded-lg border border-gray-200 p-4 dark:border-gray-700">
                    <p class="text-sm text-gray-500 dark:text-gray-400">{tile.label}</p>
                    <p class="text-2xl font-semibold text-gray-900 dark:text-white">{tile.value}</p>
                </div>
            }
        })
        .collect_view();

    let activity = if dashboard.recent_activity.is_empty() {
        view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No recent activity yet."</p> }
            .into_any()
    } else {
        let items = dashboard
            .recent_activity
            .iter()
            .map(|activity| {
                let label = activity_label(activity);
                let description = activity.description.clone();
                let when = activity.created_at.clone().unwrap_or_default();
                view! {
                    <li class="py-3">
                        <p class="font-medium text-gray-900 dark:text-white">{label}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
                        <p class="text-xs text-gray-400">{when}</p>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="divide-y divide-gray-200 dark:divide-gray-700">{items}</ul> }.into_any()
    };

    view! {
        <section class="grid grid-cols-2 gap-4 md:grid-cols-3">{tiles}</section>
        <section class="space-y-3">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Recent activity"</h2>
            {activity}
        </section>
    }
}
