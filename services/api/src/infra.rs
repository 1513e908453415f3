use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use waitlist_admin::config::WaitlistConfig;
use waitlist_admin::waitlist::{RecordStore, SharedWaitlist, ToastNotifier, WaitlistView};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the dashboard session served over HTTP, backed by the generated sample set.
pub(crate) fn build_session(config: &WaitlistConfig) -> SharedWaitlist<ToastNotifier> {
    let store = Arc::new(RecordStore::generate(config.sample_size));
    let notifier = Arc::new(ToastNotifier::new(config.toast_duration));
    Arc::new(Mutex::new(WaitlistView::new(
        store,
        notifier,
        config.page_size,
    )))
}
