use crate::config;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Error => "alert alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Where transient user feedback goes.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_source: fn() -> u32,
}

impl ToastStore {
    /// Dismiss delay follows the runtime config, read when each toast is shown.
    pub fn new() -> Self {
        Self::with_duration_source(config::toast_duration_ms)
    }

    pub fn with_duration_source(duration_source: fn() -> u32) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
            duration_source,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        (self.duration_source)()
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });
        self.schedule_dismiss(id);
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let store = *self;
        gloo_timers::callback::Timeout::new(self.duration_ms(), move || store.dismiss(id)).forget();
    }

    // No timers off the browser; toasts stay until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, id: u64) {
        log::trace!("toast {} would expire after {}ms", id, self.duration_ms());
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastStore {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>().unwrap_or_else(provide_toasts)
}
