//! Phone number capture for accounts created without one. Login routes here
//! whenever the signed-in user has no phone on file.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::{
    account::client,
    auth::{state::use_auth, RequireAuth},
};
use carpool_ui::{
    flows::profile::{normalize_phone, PROFILE_FAILED},
    AppError, MountGuard,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <CompleteProfileForm />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn CompleteProfileForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (phone, set_phone) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.teardown()
    });

    let save_action = Action::new_local(move |phone: &String| {
        let phone = phone.clone();
        let token = auth.token();
        async move {
            let token = token.ok_or_else(|| AppError::Validation("Please sign in again.".to_string()))?;
            client::update_profile(&token, phone).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            guard.run(|| match result {
                Ok(user) => {
                    let route = auth.complete_profile(user);
                    navigate(route, Default::default());
                }
                Err(err) => {
                    if auth.handle_failure(&err).is_none() {
                        set_error.set(Some(err.user_message(PROFILE_FAILED)));
                    }
                }
            });
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match normalize_phone(&phone.get_untracked()) {
            Ok(phone) => {
                save_action.dispatch(phone);
            }
            Err(err) => set_error.set(Some(err.user_message(PROFILE_FAILED))),
        }
    };

    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome, {}!", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="max-w-sm mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Complete your profile"</h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {greeting} " Add a phone number so drivers and riders can reach you."
            </p>
            <form class="space-y-5" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="phone"
                    >
                        "Phone number"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="tel"
                        placeholder="+1 555 010 0000"
                        required
                        on:input=move |event| set_phone.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save"
                </Button>
            </form>
            {move || save_action.pending().get().then_some(view! { <Spinner /> })}
            {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
        </div>
    }
}
