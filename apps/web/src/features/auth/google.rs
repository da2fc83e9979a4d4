//! Google Identity Services button. The GIS script in `index.html` exposes
//! `google.accounts.id`; this module initializes it with the configured client
//! id and forwards the returned ID token to the caller. The credential is a
//! bearer secret and is never logged.

use crate::app_lib::config::AppConfig;
use js_sys::{Function, Object, Reflect};
use leptos::{html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn accounts_id() -> Option<JsValue> {
    let window = web_sys::window()?;
    let google = get(&window, "google")?;
    let accounts = get(&google, "accounts")?;
    get(&accounts, "id")
}

fn call(target: &JsValue, method: &str, args: &[&JsValue]) -> Option<()> {
    let function = get(target, method)?.dyn_into::<Function>().ok()?;
    let result = match args {
        [first] => function.call1(target, first),
        [first, second] => function.call2(target, first, second),
        _ => function.call0(target),
    };
    result.ok().map(|_| ())
}

type CredentialCallback = Closure<dyn Fn(JsValue)>;

/// Initializes GIS and renders its button into `container`. Returns the
/// callback GIS now holds, or `None` when the script has not loaded. The
/// caller keeps the callback alive while the button is mounted.
fn render_button(
    container: &web_sys::HtmlDivElement,
    client_id: &str,
    on_credential: Callback<String>,
) -> Option<CredentialCallback> {
    let id = accounts_id()?;

    let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        if let Some(credential) = get(&response, "credential").and_then(|value| value.as_string())
        {
            on_credential.run(credential);
        }
    });

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("client_id"),
        &JsValue::from_str(client_id),
    )
    .ok()?;
    Reflect::set(
        &options,
        &JsValue::from_str("callback"),
        callback.as_ref().unchecked_ref(),
    )
    .ok()?;
    call(&id, "initialize", &[&options])?;

    let appearance = Object::new();
    Reflect::set(
        &appearance,
        &JsValue::from_str("theme"),
        &JsValue::from_str("outline"),
    )
    .ok()?;
    Reflect::set(
        &appearance,
        &JsValue::from_str("size"),
        &JsValue::from_str("large"),
    )
    .ok()?;
    let target: &JsValue = container.as_ref();
    call(&id, "renderButton", &[target, &appearance])?;
    Some(callback)
}

/// Google sign-in button. Renders nothing when no client id is configured.
#[component]
pub fn GoogleSignInButton(#[prop(into)] on_credential: Callback<String>) -> impl IntoView {
    let config = AppConfig::load();
    let container = NodeRef::<html::Div>::new();
    let (unavailable, set_unavailable) = signal(false);
    let registered = StoredValue::new_local(None::<CredentialCallback>);
    on_cleanup(move || {
        registered.update_value(|callback| {
            callback.take();
        });
    });

    if config.google_enabled() {
        let client_id = config.google_client_id.clone();
        Effect::new(move |_| {
            if let Some(element) = container.get() {
                match render_button(&element, &client_id, on_credential) {
                    Some(callback) => registered.set_value(Some(callback)),
                    None => set_unavailable.set(true),
                }
            }
        });
    }

    view! {
        <Show when=move || config.google_enabled()>
            <div class="flex justify-center" node_ref=container></div>
            <Show when=move || unavailable.get()>
                <p class="text-sm text-gray-500 text-center">"Google sign-in is unavailable right now."</p>
            </Show>
        </Show>
    }
}
