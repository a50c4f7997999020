//! Toast notifications.
//!
//! Every user action ends in at most one toast: success, a validation warning
//! or the error reported by the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent};

const TOAST_TIMEOUT_MS: u32 = 4_000;
const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            ToastKind::Info => MessageBarIntent::Info,
            ToastKind::Success => MessageBarIntent::Success,
            ToastKind::Warning => MessageBarIntent::Warning,
            ToastKind::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Push a toast onto the stack, dropping the oldest ones above the limit.
fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_VISIBLE_TOASTS {
        let overflow = toasts.len() - MAX_VISIBLE_TOASTS;
        toasts.drain(..overflow);
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn show(&self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Error => log::error!("{}", message),
            ToastKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts
            .update(|toasts| push_bounded(toasts, Toast { id, kind, message }));

        let service = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toaster__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=toast.kind.intent()>
                                <span>{toast.message}</span>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: format!("toast {}", id),
        }
    }

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..(MAX_VISIBLE_TOASTS as u64 + 2) {
            push_bounded(&mut toasts, toast(id));
        }
        assert_eq!(toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(toasts.first().map(|t| t.id), Some(2));
        assert_eq!(toasts.last().map(|t| t.id), Some(MAX_VISIBLE_TOASTS as u64 + 1));
    }
}
