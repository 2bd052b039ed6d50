//! Login page
//!
//! Posts credentials to the MEDINIC API, persists the bearer token and
//! hands the session over to the `/redirect` route. Also carries the
//! "request access" side channel for people without an account.

use medinic_frontend_common::{
    AuthApiService, BrowserTokenStore, FrontendConfig, SupportApiService, TokenStore,
};
use url::form_urlencoded;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);
    let show_password = use_state(|| false);
    let access_requested = use_state(|| false);
    let access_sending = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| {
            show_password.set(!*show_password);
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One in-flight login at a time; the button is also disabled
            // while loading.
            if *loading {
                return;
            }
            error.set(None);

            let user = (*username).clone();
            let pass = (*password).clone();
            if let Err(e) = AuthApiService::validate(&user, &pass) {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match AuthApiService::new().login(&user, &pass).await {
                    Ok(token) => {
                        // Persist before navigating so the redirect route
                        // can fall back to the stored token.
                        BrowserTokenStore::new().set(&token);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&redirect_route_url(&token));
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                // Benign no-op when the page is already navigating away.
                loading.set(false);
            });
        })
    };

    let on_request_access = {
        let username = username.clone();
        let access_requested = access_requested.clone();
        let access_sending = access_sending.clone();

        Callback::from(move |_: MouseEvent| {
            if *access_requested || *access_sending {
                return;
            }
            access_sending.set(true);

            let user = (*username).clone();
            let access_requested = access_requested.clone();
            let access_sending = access_sending.clone();
            spawn_local(async move {
                // Best-effort: the service swallows delivery failures, so
                // the contact details always appear.
                SupportApiService::new().request_access(&user).await;
                access_requested.set(true);
                access_sending.set(false);
            });
        })
    };

    let cfg = FrontendConfig::get();

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-900 via-slate-800 to-sky-900 px-4">
            <div class="w-full max-w-md bg-slate-900/70 border border-white/10 rounded-2xl shadow-xl p-8">
                <div class="flex justify-center mb-4">
                    <img src="/medinic-logo.png" alt="MEDINIC" class="h-12" />
                </div>
                <h2 class="text-2xl font-semibold text-white text-center mb-6">{"Accede al monitoreo"}</h2>
                <form onsubmit={on_submit}>
                    <input
                        class="w-full mb-3 px-4 py-2 rounded-lg bg-slate-800 border border-white/10 text-white placeholder-slate-400 focus:outline-none focus:border-sky-400"
                        placeholder="Usuario"
                        value={(*username).clone()}
                        oninput={on_username_input}
                    />
                    <div class="relative mb-4">
                        <input
                            class="w-full px-4 py-2 rounded-lg bg-slate-800 border border-white/10 text-white placeholder-slate-400 focus:outline-none focus:border-sky-400"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Contraseña"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                        <button
                            type="button"
                            class="absolute right-2 top-1/2 -translate-y-1/2 text-sm text-slate-300 hover:text-white px-1"
                            onclick={on_toggle_password}
                            aria-label={if *show_password { "Ocultar contraseña" } else { "Mostrar contraseña" }}
                        >
                            { if *show_password { "Ocultar" } else { "Mostrar" } }
                        </button>
                    </div>
                    <button
                        class="w-full py-2 rounded-lg bg-sky-500 hover:bg-sky-400 disabled:opacity-60 text-white font-medium transition-colors"
                        type="submit"
                        disabled={*loading}
                    >
                        { if *loading { "Accediendo…" } else { "Entrar" } }
                    </button>
                    <div class="flex justify-between items-center mt-3">
                        <button
                            type="button"
                            class="text-sm text-slate-300 hover:text-white border border-white/20 rounded-lg px-3 py-1 disabled:opacity-60"
                            onclick={on_request_access}
                            disabled={*access_requested || *access_sending}
                            title="Solicitar acceso al administrador"
                        >
                            { if *access_sending { "Enviando…" } else { "Registrarse" } }
                        </button>
                        <a class="text-sm text-slate-400 hover:text-white" href="#">{"Ayuda"}</a>
                    </div>
                    if *access_requested {
                        <div class="mt-3 rounded-lg bg-emerald-900/40 border border-emerald-500/30 text-emerald-100 text-sm p-3" role="alert">
                            {"Solicitud de acceso preparada. Puedes contactar al administrador ahora:"}
                            <div class="flex flex-wrap gap-2 mt-2">
                                <a
                                    class="px-3 py-1 rounded bg-white text-slate-900 text-sm"
                                    href={mailto_href(&cfg.admin_email, username.as_str())}
                                >
                                    {"Enviar correo"}
                                </a>
                                <a
                                    class="px-3 py-1 rounded bg-emerald-500 text-white text-sm"
                                    href={whatsapp_href(&cfg.admin_whatsapp, username.as_str())}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"WhatsApp"}
                                </a>
                            </div>
                            <div class="opacity-75 mt-1">{format!("Admin: {} — {}", cfg.admin_email, cfg.admin_whatsapp)}</div>
                        </div>
                    }
                </form>
                <div class="flex justify-between items-center mt-4 text-sm text-slate-400">
                    <label class="flex items-center gap-2">
                        <input type="checkbox" />
                        {"Recordarme"}
                    </label>
                    <a href="#" class="hover:text-white">{"Olvidé mi contraseña"}</a>
                </div>
                if let Some(message) = &*error {
                    <p class="mt-3 text-sm text-rose-400">{message.clone()}</p>
                }
            </div>
        </div>
    }
}

/// Route the submitter navigates to after a successful login. The doctor
/// profile is the fixed default target.
fn redirect_route_url(token: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("target", "doctor")
        .append_pair("token", token)
        .finish();
    format!("/redirect?{query}")
}

fn suggested_user(username: &str) -> &str {
    if username.is_empty() {
        "(sin usuario)"
    } else {
        username
    }
}

fn mailto_href(email: &str, username: &str) -> String {
    let subject = String::from(js_sys::encode_uri_component(
        "Solicitud de acceso - Plataforma ECG",
    ));
    let body = String::from(js_sys::encode_uri_component(&format!(
        "Hola,\n\nMe gustaría solicitar acceso a la plataforma ECG.\nUsuario sugerido: {}\n\nGracias.",
        suggested_user(username)
    )));
    format!("mailto:{email}?subject={subject}&body={body}")
}

fn whatsapp_href(number: &str, username: &str) -> String {
    let text = String::from(js_sys::encode_uri_component(&format!(
        "Hola, solicito acceso a la plataforma ECG. Usuario sugerido: {}",
        suggested_user(username)
    )));
    format!("https://wa.me/{}?text={text}", whatsapp_digits(number))
}

// wa.me only accepts bare digits.
fn whatsapp_digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_route_embeds_exact_token_and_doctor_target() {
        assert_eq!(
            redirect_route_url("abc123"),
            "/redirect?target=doctor&token=abc123"
        );
    }

    #[test]
    fn redirect_route_encodes_reserved_characters() {
        let url = redirect_route_url("a&b=c");
        assert_eq!(url, "/redirect?target=doctor&token=a%26b%3Dc");
    }

    #[test]
    fn whatsapp_number_is_reduced_to_digits() {
        assert_eq!(whatsapp_digits("+505 83797821"), "50583797821");
        assert_eq!(whatsapp_digits("+1 (555) 010-0"), "15550100");
    }

    #[test]
    fn suggested_user_falls_back_when_empty() {
        assert_eq!(suggested_user(""), "(sin usuario)");
        assert_eq!(suggested_user("ana"), "ana");
    }
}
