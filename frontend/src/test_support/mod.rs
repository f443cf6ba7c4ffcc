#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::SignupRequest;
    use crate::state::{
        query::{QueryInvalidator, QueryKey},
        toast::{Notifier, ToastKind},
    };
    use std::cell::RefCell;

    pub fn filled_signup() -> SignupRequest {
        SignupRequest {
            email: "bob@example.com".into(),
            username: "bob".into(),
            full_name: "Bob Builder".into(),
            password: "hunter2".into(),
        }
    }

    /// Records every notification instead of rendering it.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub events: RefCell<Vec<(ToastKind, String)>>,
    }

    impl RecordingNotifier {
        pub fn count(&self, kind: ToastKind) -> usize {
            self.events.borrow().iter().filter(|(k, _)| *k == kind).count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.events
                .borrow_mut()
                .push((ToastKind::Success, message.to_string()));
        }

        fn error(&self, message: &str) {
            self.events
                .borrow_mut()
                .push((ToastKind::Error, message.to_string()));
        }
    }

    #[derive(Default)]
    pub struct RecordingInvalidator {
        pub keys: RefCell<Vec<QueryKey>>,
    }

    impl QueryInvalidator for RecordingInvalidator {
        fn invalidate(&self, key: QueryKey) {
            self.keys.borrow_mut().push(key);
        }
    }
}
