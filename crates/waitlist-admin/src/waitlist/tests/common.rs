use std::sync::{Arc, Mutex};

use crate::waitlist::domain::{RecordId, WaitlistRecord};
use crate::waitlist::notify::Notifier;
use crate::waitlist::store::RecordStore;
use crate::waitlist::view::WaitlistView;
use crate::waitlist::DEFAULT_PAGE_SIZE;

#[derive(Default)]
pub(super) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(super) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier mutex poisoned")
            .push(message.to_string());
    }
}

pub(super) fn sample_store() -> Arc<RecordStore> {
    Arc::new(RecordStore::sample())
}

pub(super) fn build_view() -> (WaitlistView<RecordingNotifier>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let view = WaitlistView::new(sample_store(), notifier.clone(), DEFAULT_PAGE_SIZE);
    (view, notifier)
}

pub(super) fn ids(records: &[&WaitlistRecord]) -> Vec<u32> {
    records.iter().map(|record| record.id.0).collect()
}

pub(super) fn row_ids(view: &WaitlistView<RecordingNotifier>) -> Vec<u32> {
    view.visible_ids().into_iter().map(|RecordId(id)| id).collect()
}
