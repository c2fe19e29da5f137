//! Auth page with a login / sign-up toggle form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::{AuthForm, Mode};

/// Notice shown while a submission is in flight.
fn pending_notice(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Signing in...",
        Mode::SignUp => "Creating account...",
    }
}

/// Auth page — one form whose submit action is selected by the current
/// mode: sign-up mode posts to the user-creation endpoint, login mode to
/// the login endpoint. The submit button is disabled while a request is in
/// flight so a second submission cannot overlap the first.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let snapshot = form.get_untracked();
        busy.set(true);
        notice.set(pending_notice(snapshot.mode).to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if snapshot.mode.is_sign_up() {
                match crate::net::api::sign_up(&snapshot.sign_up_request()).await {
                    Ok(user) => {
                        notice.set(crate::net::api::sign_up_success_notice(&user));
                        form.update(AuthForm::return_to_login);
                    }
                    Err(e) => notice.set(crate::net::api::sign_up_failed_notice(&e)),
                }
            } else {
                match crate::net::api::log_in(&snapshot.credentials()).await {
                    Ok(user) => notice.set(crate::net::api::login_success_notice(&user)),
                    Err(e) => notice.set(crate::net::api::login_failed_notice(&e)),
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Campus Dispatch"</h1>
                <p class="login-card__subtitle">{move || form.with(|f| f.mode.title())}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required=true
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <Show when=move || form.with(|f| f.mode.is_sign_up())>
                        <select
                            class="login-select"
                            required=true
                            prop:value=move || form.with(|f| f.role.as_str())
                            on:change=move |ev| {
                                form.update(|f| {
                                    f.set_role(
                                        Role::parse(&event_target_value(&ev)).unwrap_or_default(),
                                    );
                                });
                            }
                        >
                            <option value="student">"Student"</option>
                            <option value="dispatch">"Dispatch"</option>
                        </select>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || form.with(|f| f.mode.submit_label())}
                    </button>
                </form>
                <button
                    class="login-toggle"
                    type="button"
                    on:click=move |_| form.update(AuthForm::toggle_mode)
                >
                    {move || form.with(|f| f.mode.toggle_label())}
                </button>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
