//! Sign-in page. An unverified account is not treated as a plain failure: the
//! page keeps the message and offers to continue to email verification.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, google::GoogleSignInButton, state::use_auth};
use carpool_ui::{
    flows::login::{validate_credentials, LoginState, GOOGLE_LOGIN_FAILED, LOGIN_FAILED},
    paths,
    types::Credentials,
    MountGuard,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (state, set_state) = signal(LoginState::Idle);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.teardown()
    });

    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);
    Effect::new(move |_| {
        if let Some(route) = redirect.get() {
            navigate(route, Default::default());
        }
    });

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::login(&credentials).await }
    });

    Effect::new({
        let guard = guard.clone();
        move |_| {
            if let Some(result) = login_action.value().get() {
                guard.run(|| match result {
                    Ok(response) => {
                        set_state.set(LoginState::Idle);
                        set_redirect.set(Some(auth.complete_login(response)));
                    }
                    Err(err) => set_state.set(LoginState::from_failure(
                        &err,
                        &email.get_untracked(),
                        LOGIN_FAILED,
                    )),
                });
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let input = Credentials::new(email.get_untracked(), password.get_untracked());
        match validate_credentials(&input) {
            Ok(credentials) => {
                set_state.set(LoginState::Submitting);
                login_action.dispatch(credentials);
            }
            Err(err) => set_state.set(LoginState::Failed(err.user_message(LOGIN_FAILED))),
        }
    };

    let on_google = Callback::new(move |credential: String| {
        let guard = guard.clone();
        set_state.set(LoginState::Submitting);
        spawn_local(async move {
            let result = client::google_login(credential).await;
            guard.run(|| match result {
                Ok(response) => {
                    set_state.set(LoginState::Idle);
                    set_redirect.set(Some(auth.complete_login(response)));
                }
                Err(err) => {
                    set_state.set(LoginState::Failed(err.user_message(GOOGLE_LOGIN_FAILED)));
                }
            });
        });
    });

    let on_verify = Callback::new(move |_: MouseEvent| {
        if let Some(pending) = state.with_untracked(LoginState::verification_handoff) {
            auth.set_pending_verification(pending);
            set_redirect.set(Some(paths::VERIFY_EMAIL));
        }
    });

    let submitting = Signal::derive(move || state.with(LoginState::is_submitting));
    let unverified = move || matches!(state.get(), LoginState::Unverified { .. });

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Sign in"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label class=LABEL_CLASS for="email">"Your email"</label>
                        <input
                            id="email"
                            type="email"
                            class=INPUT_CLASS
                            autocomplete="email"
                            placeholder="name@example.com"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS for="password">"Your password"</label>
                        <input
                            id="password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=submitting>
                        "Sign in"
                    </Button>
                </form>
                {move || submitting.get().then_some(view! { <Spinner /> })}
                {move || {
                    state
                        .with(|state| state.message().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Show when=unverified>
                    <Button on_click=on_verify>"Verify email"</Button>
                </Show>
                <div class="border-t border-gray-200 pt-6 dark:border-gray-700">
                    <GoogleSignInButton on_credential=on_google />
                </div>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "New to Carpool? "
                    <A href=paths::REGISTER {..} class="font-medium text-emerald-600 hover:underline">
                        "Create an account"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
