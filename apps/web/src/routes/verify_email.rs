//! Email verification with a six-digit code. The page needs the hand-off left
//! by login or registration and sends the user back to registration without
//! one. Requests started here are dropped if they finish after the page is
//! gone, and the resend countdown stops with the page.

use crate::components::{Alert, AlertKind, AppShell, Button, OtpFields, Spinner};
use crate::features::auth::{client, state::use_auth};
use carpool_ui::{
    flows::verify::{resolve_pending, VerificationForm, RESEND_FAILED, VERIFY_FAILED},
    MountGuard, PendingVerification, TimerState,
};
use gloo_timers::callback::Interval;
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_router::hooks::use_navigate;

const TICK_MS: u32 = 1_000;

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    None,
    Error(String),
    Sent(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let pending = resolve_pending(auth.pending_verification().as_ref());

    if let Err(route) = pending {
        Effect::new(move |_| navigate(route, Default::default()));
    }

    view! {
        <AppShell>
            {pending.ok().map(|pending| view! { <VerifyEmailForm pending=pending /> })}
        </AppShell>
    }
}

/// Counts the resend timer down once a second until it reaches zero.
fn start_ticker(form: RwSignal<VerificationForm>) -> Interval {
    Interval::new(TICK_MS, move || {
        let _ = form.try_update(|form| {
            if !form.timer().can_resend() {
                form.tick();
            }
        });
    })
}

#[component]
fn VerifyEmailForm(pending: PendingVerification) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = pending.email.clone();
    let form = RwSignal::new(VerificationForm::new(pending));
    let (notice, set_notice) = signal(Notice::None);
    let (verifying, set_verifying) = signal(false);
    let (resending, set_resending) = signal(false);
    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);

    let guard = MountGuard::new();
    let ticker = StoredValue::new_local(Some(start_ticker(form)));
    on_cleanup({
        let guard = guard.clone();
        move || {
            guard.teardown();
            ticker.update_value(|ticker| {
                if let Some(interval) = ticker.take() {
                    interval.cancel();
                }
            });
        }
    });

    Effect::new(move |_| {
        if let Some(route) = redirect.get() {
            navigate(route, Default::default());
        }
    });

    let on_submit = {
        let guard = guard.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            if verifying.get_untracked() {
                return;
            }
            let request = match form.with_untracked(VerificationForm::submission) {
                Ok(request) => request,
                Err(err) => {
                    set_notice.set(Notice::Error(err.user_message(VERIFY_FAILED)));
                    return;
                }
            };

            set_notice.set(Notice::None);
            set_verifying.set(true);
            let guard = guard.clone();
            spawn_local(async move {
                let result = client::verify_email(&request).await;
                guard.run(|| {
                    set_verifying.set(false);
                    match result {
                        Ok(response) => {
                            set_redirect.set(Some(auth.complete_verification(response)));
                        }
                        Err(err) => set_notice.set(Notice::Error(err.user_message(VERIFY_FAILED))),
                    }
                });
            });
        }
    };

    let on_resend = Callback::new(move |_: MouseEvent| {
        if resending.get_untracked() {
            return;
        }
        let request = match form.with_untracked(VerificationForm::begin_resend) {
            Ok(request) => request,
            Err(err) => {
                set_notice.set(Notice::Error(err.user_message(RESEND_FAILED)));
                return;
            }
        };

        set_resending.set(true);
        let guard = guard.clone();
        spawn_local(async move {
            let result = client::resend_otp(&request).await;
            guard.run(|| {
                set_resending.set(false);
                match result {
                    Ok(()) => {
                        form.update(VerificationForm::resend_succeeded);
                        set_notice.set(Notice::Sent(form.with_untracked(VerificationForm::resend_notice)));
                        ticker.update_value(|ticker| {
                            if let Some(interval) = ticker.take() {
                                interval.cancel();
                            }
                            *ticker = Some(start_ticker(form));
                        });
                    }
                    Err(err) => set_notice.set(Notice::Error(err.user_message(RESEND_FAILED))),
                }
            });
        });
    });

    let timer_state = Memo::new(move |_| form.with(|form| form.timer().state()));

    view! {
        <div class="max-w-md mx-auto space-y-6 text-center">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Verify your email"</h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Enter the 6-digit code we sent to "
                <span class="font-medium text-gray-900 dark:text-white">{email}</span>
            </p>
            <form class="space-y-6" on:submit=on_submit>
                <OtpFields form=form disabled=verifying />
                <Button button_type="submit" disabled=verifying>
                    "Verify"
                </Button>
            </form>
            {move || verifying.get().then_some(view! { <Spinner /> })}
            {move || match notice.get() {
                Notice::None => None,
                Notice::Error(message) => {
                    Some(view! { <Alert kind=AlertKind::Error message=message /> }.into_any())
                }
                Notice::Sent(message) => {
                    Some(view! { <Alert kind=AlertKind::Success message=message /> }.into_any())
                }
            }}
            <div class="text-sm text-gray-500 dark:text-gray-400">
                {move || match timer_state.get() {
                    TimerState::Counting { remaining } => {
                        view! { <span>{format!("Resend code in {remaining}s")}</span> }.into_any()
                    }
                    TimerState::Eligible => {
                        view! {
                            <Button on_click=on_resend disabled=resending>
                                "Resend code"
                            </Button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
