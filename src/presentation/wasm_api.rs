use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{LoadRecordsUseCase, RecordBrowser};
use crate::domain::logging::LogComponent;
use crate::domain::price_registry::FilterField;
use crate::infrastructure::http::PreciosRestClient;
use crate::infrastructure::ui;
use crate::log_error;

/// WASM API bridging JavaScript events to the application layer.
/// Minimal logic - only the bridge, state lives in [`RecordBrowser`].
#[wasm_bindgen]
pub struct PriceTableApi {
    browser: Rc<RefCell<RecordBrowser>>,
    client: PreciosRestClient,
}

#[wasm_bindgen]
impl PriceTableApi {
    /// Create a new instance; `endpoint` overrides the function-host default
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: Option<String>) -> Self {
        let client = match endpoint {
            Some(endpoint) => PreciosRestClient::with_endpoint(endpoint),
            None => PreciosRestClient::new(),
        };

        Self { browser: Rc::new(RefCell::new(RecordBrowser::new())), client }
    }

    /// Fetch records with optional region filters; resolves with the count
    #[wasm_bindgen(js_name = loadRecords)]
    pub fn load_records(
        &self,
        departamento: Option<String>,
        provincia: Option<String>,
        distrito: Option<String>,
    ) -> Promise {
        let browser = self.browser.clone();
        let client = self.client.clone();

        future_to_promise(async move {
            let region = {
                let mut browser = browser.borrow_mut();
                browser
                    .select_filter(FilterField::Departamento, departamento.as_deref().unwrap_or(""));
                browser.select_filter(FilterField::Provincia, provincia.as_deref().unwrap_or(""));
                browser.select_filter(FilterField::Distrito, distrito.as_deref().unwrap_or(""));
                browser.region_filter()
            };

            match LoadRecordsUseCase::new(client).execute(&region).await {
                Ok(records) => {
                    let mut browser = browser.borrow_mut();
                    browser.commit_loaded(records);

                    // Optional host-page status element; absent is a no-op
                    ui::update_status_element(
                        "estadoRegistros",
                        &format!("{} registros cargados", browser.loaded_count()),
                    );

                    Ok(JsValue::from_f64(browser.loaded_count() as f64))
                }
                Err(e) => {
                    log_error!(LogComponent::Presentation("PriceTableApi"), "❌ Load failed: {}", e);
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        })
    }

    /// Client-side narrowing; never issues a request
    #[wasm_bindgen(js_name = filterByEstablishment)]
    pub fn filter_by_establishment(&self, tipo: String) {
        self.browser.borrow_mut().narrow_by_establishment(&tipo);
    }

    /// Returns whether the page change was within bounds
    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&self, page: u32) -> bool {
        self.browser.borrow_mut().go_to_page(page as usize)
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.browser.borrow().current_page() as u32
    }

    #[wasm_bindgen(js_name = totalPages)]
    pub fn total_pages(&self) -> u32 {
        self.browser.borrow().total_pages() as u32
    }

    #[wasm_bindgen(js_name = infoText)]
    pub fn info_text(&self) -> String {
        self.browser.borrow().info_text()
    }

    /// Current page rows as a JSON array string for the host page to render
    #[wasm_bindgen(js_name = pageRowsJson)]
    pub fn page_rows_json(&self) -> String {
        let snapshot = self.browser.borrow().snapshot();
        serde_json::to_string(&snapshot.rows).unwrap_or_else(|_| "[]".to_string())
    }
}
