//! Account creation. A successful registration never signs the user in; it
//! hands the email over to the verification page.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth};
use carpool_ui::{
    flows::register::{handoff, RegisterForm, MIN_PASSWORD_LENGTH, REGISTER_FAILED},
    paths,
    types::RegisterRequest,
    AppError, MountGuard,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.teardown()
    });

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move {
            let response = client::register(&request).await?;
            Ok::<_, AppError>(handoff(&request, response))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            guard.run(|| match result {
                Ok(pending) => {
                    auth.set_pending_verification(pending);
                    navigate(paths::VERIFY_EMAIL, Default::default());
                }
                Err(err) => set_error.set(Some(err.user_message(REGISTER_FAILED))),
            });
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(RegisterForm::validate) {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err.user_message(REGISTER_FAILED))),
        }
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      autocomplete: &'static str,
                      update: fn(&mut RegisterForm, String)| {
        view! {
            <div>
                <label class=LABEL_CLASS for=id>{label}</label>
                <input
                    id=id
                    type=input_type
                    class=INPUT_CLASS
                    autocomplete=autocomplete
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        form.update(|form| update(form, value));
                    }
                />
            </div>
        }
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Create your account"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    {field("name", "Full name", "text", "name", |form, value| form.name = value)}
                    {field("email", "Email", "email", "email", |form, value| form.email = value)}
                    {field("phone", "Phone (optional)", "tel", "tel", |form, value| form.phone = value)}
                    {field("password", "Password", "password", "new-password", |form, value| {
                        form.password = value;
                    })}
                    {field(
                        "confirm-password",
                        "Confirm password",
                        "password",
                        "new-password",
                        |form, value| form.confirm_password = value,
                    )}
                    <p class="text-xs text-gray-500 dark:text-gray-400">
                        {format!("At least {MIN_PASSWORD_LENGTH} characters.")}
                    </p>
                    <Button button_type="submit" disabled=register_action.pending()>
                        "Sign up"
                    </Button>
                </form>
                {move || register_action.pending().get().then_some(view! { <Spinner /> })}
                {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class="font-medium text-emerald-600 hover:underline">
                        "Sign in"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
