use crate::application::TableSnapshot;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub snapshot: RwSignal<TableSnapshot>,
    pub is_loading: RwSignal<bool>,
    pub status: RwSignal<String>,
    pub record_count: RwSignal<usize>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        snapshot: create_rw_signal(TableSnapshot::default()),
        is_loading: create_rw_signal(false),
        status: create_rw_signal(String::new()),
        record_count: create_rw_signal(0),
    })
}

crate::global_signals! {
    pub snapshot_signal => snapshot: crate::application::TableSnapshot,
    pub loading_signal => is_loading: bool,
    pub status_signal => status: String,
    pub record_count_signal => record_count: usize,
}
