//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::AuthSession;

use crate::make_session_service;

/// Session state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: AuthSession,
    /// Whether the persisted session has been read yet.
    pub hydrated: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores the persisted session.
/// Children are not rendered until the session has been hydrated, so
/// anything guarded by it never sees a stale signed-out state.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session_state = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        let mut service = make_session_service();
        let session = service.hydrate().await.clone();
        tracing::info!("Session restored (authenticated: {})", session.is_authenticated);
        session_state.set(SessionState {
            session,
            hydrated: true,
        });
    });

    use_context_provider(|| session_state);

    if !session_state().hydrated {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to end the current session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session_state = use_session();

    let onclick = move |_| async move {
        let mut service = make_session_service();
        match service.sign_out().await {
            Ok(session) => {
                session_state.set(SessionState {
                    session: session.clone(),
                    hydrated: true,
                });
                // Redirect to login
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to clear session: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: !session_state().is_authenticated(),
            onclick: onclick,
            "{label}"
        }
    }
}
