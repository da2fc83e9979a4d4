//! Six single-digit inputs bound to the `OtpInput` held by a
//! `VerificationForm`. The view model decides what each keystroke means and
//! which cell owns focus; this component only mirrors it into the DOM.

use carpool_ui::{flows::verify::VerificationForm, InputOutcome, OTP_LENGTH};
use leptos::{
    ev::{ClipboardEvent, KeyboardEvent},
    html,
    prelude::*,
};

const CELL_CLASS: &str = "w-12 h-14 text-center text-2xl font-semibold bg-gray-50 border border-gray-300 text-gray-900 rounded-lg focus:ring-emerald-500 focus:border-emerald-500 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

#[component]
pub fn OtpFields(
    form: RwSignal<VerificationForm>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let cells: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());
    let focus = Memo::new(move |_| form.with(|form| form.otp().focus()));

    Effect::new(move |_| {
        let index = focus.get();
        if let Some(input) = cells[index].get() {
            let _ = input.focus();
        }
    });

    let on_paste = move |event: ClipboardEvent| {
        event.prevent_default();
        let text = event
            .clipboard_data()
            .and_then(|data| data.get_data("text").ok())
            .unwrap_or_default();
        form.update(|form| {
            form.otp_mut().paste(&text);
        });
    };

    let inputs = (0..OTP_LENGTH)
        .map(move |index| {
            let autocomplete = if index == 0 { "one-time-code" } else { "off" };
            view! {
                <input
                    node_ref=cells[index]
                    type="text"
                    inputmode="numeric"
                    autocomplete=autocomplete
                    maxlength="1"
                    class=CELL_CLASS
                    aria-label=format!("Digit {}", index + 1)
                    disabled=move || disabled.get()
                    prop:value=move || form.with(|form| form.otp().value(index))
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        let outcome = form.try_update(|form| form.otp_mut().input(index, &value));
                        if outcome == Some(InputOutcome::Rejected) {
                            if let Some(input) = cells[index].get_untracked() {
                                input.set_value(&form.with_untracked(|form| form.otp().value(index)));
                            }
                        }
                    }
                    on:keydown=move |event: KeyboardEvent| {
                        if event.key() == "Backspace" {
                            form.update(|form| {
                                form.otp_mut().backspace(index);
                            });
                        }
                    }
                    on:focus=move |_| {
                        form.update(|form| form.otp_mut().set_focus(index));
                        if let Some(input) = cells[index].get_untracked() {
                            input.select();
                        }
                    }
                    on:paste=on_paste
                />
            }
        })
        .collect_view();

    view! { <div class="flex justify-center gap-2">{inputs}</div> }
}
