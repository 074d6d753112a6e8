use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::{LoadRecordsUseCase, RecordBrowser};
use crate::domain::browse::PageItem;
use crate::domain::logging::LogComponent;
use crate::domain::price_registry::FilterField;
use crate::{log_error, log_info};
use crate::global_state::{loading_signal, record_count_signal, snapshot_signal, status_signal};
use crate::infrastructure::http::PreciosRestClient;
use crate::infrastructure::ui;

/// Single generic message for any failed fetch; causes are only logged
pub const FETCH_ERROR_MESSAGE: &str = "Error al cargar los datos. Intente nuevamente.";

type SharedBrowser = Rc<RefCell<RecordBrowser>>;

/// Push the controller state into the global render signals
fn publish(browser: &RecordBrowser) {
    snapshot_signal().set(browser.snapshot());
    record_count_signal().set(browser.working_count());
}

/// Fetch with the current region filter and commit the response.
///
/// Overlapping fetches are not sequenced: whichever response resolves last
/// commits last. The loading overlay is cleared unconditionally, also on
/// failure, and a failed fetch leaves the rendered state untouched.
async fn fetch_and_commit(browser: SharedBrowser, client: PreciosRestClient) {
    loading_signal().set(true);
    let region = browser.borrow().region_filter();

    let result = LoadRecordsUseCase::new(client).execute(&region).await;
    loading_signal().set(false);

    match result {
        Ok(records) => {
            let mut browser = browser.borrow_mut();
            browser.commit_loaded(records);
            publish(&browser);
            status_signal().set(format!("✅ {} registros cargados", browser.loaded_count()));
            log_info!(LogComponent::Presentation("App"), "📊 Table re-rendered on page 1");
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("App"), "❌ Fetch failed: {}", e);
            status_signal().set("❌ Error de carga".to_string());
            ui::show_error_alert(FETCH_ERROR_MESSAGE);
        }
    }
}

/// Root component of the record browser page
#[component]
pub fn App() -> impl IntoView {
    let browser: SharedBrowser = Rc::new(RefCell::new(RecordBrowser::new()));
    let client = PreciosRestClient::new();

    publish(&browser.borrow());

    // Initial unfiltered load on page ready
    {
        let browser = browser.clone();
        let client = client.clone();
        spawn_local(async move {
            fetch_and_commit(browser, client).await;
        });
    }

    view! {
        <style>
            {r#"
            .precios-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .header-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .info-value {
                font-size: 20px;
                font-weight: 700;
                color: #72c685;
            }

            .info-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 5px;
            }

            .filter-bar {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 15px;
                margin-bottom: 20px;
            }

            .filter-item label {
                display: block;
                font-size: 12px;
                color: #a0a0a0;
                margin-bottom: 4px;
            }

            .filter-item select {
                min-width: 180px;
                padding: 6px 10px;
                border-radius: 6px;
                border: 1px solid #4a5d73;
                background: #2c3e50;
                color: white;
            }

            .table-wrapper {
                overflow-x: auto;
                background: rgba(0, 0, 0, 0.25);
                border-radius: 10px;
                border: 1px solid #4a5d73;
            }

            .records-table {
                width: 100%;
                border-collapse: collapse;
                font-size: 13px;
            }

            .records-table th, .records-table td {
                padding: 8px 10px;
                text-align: left;
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                white-space: nowrap;
            }

            .records-table th {
                background: rgba(0, 0, 0, 0.4);
                color: #72c685;
            }

            .pagination {
                display: flex;
                justify-content: center;
                gap: 6px;
                margin: 15px 0 5px;
            }

            .page-link {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 6px 12px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 13px;
            }

            .page-link:hover {
                background: #5a6d83;
            }

            .page-link.active {
                background: #72c685;
                color: #1e3c72;
                font-weight: bold;
            }

            .page-ellipsis {
                padding: 6px 4px;
                color: #a0a0a0;
            }

            .pagination-info {
                text-align: center;
                font-size: 13px;
                color: #a0a0a0;
            }

            .loading-overlay {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            }

            .loading-box {
                background: #2c3e50;
                border: 1px solid #4a5d73;
                border-radius: 10px;
                padding: 20px 40px;
                font-size: 16px;
            }
            "#}
        </style>
        <div class="precios-app">
            <Header />
            <FilterBar browser=browser.clone() client=client />
            <RecordTable />
            <PaginationBar browser=browser />
            <LoadingOverlay />
        </div>
    }
}

/// Page header with live record count and last status line
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"💰 Registro de Precios de Combustibles"</h1>
            <p>"Precios registrados • Osinergmin"</p>

            <div class="header-info">
                <div class="info-item">
                    <div class="info-value">
                        {move || record_count_signal().get().to_string()}
                    </div>
                    <div class="info-label">"Registros"</div>
                </div>
                <div class="info-item">
                    <div class="info-value">
                        {move || status_signal().get()}
                    </div>
                    <div class="info-label">"Estado"</div>
                </div>
            </div>
        </div>
    }
}

/// The four filter selectors.
///
/// Region changes always refetch from the server; the establishment type
/// only narrows the set already in memory.
#[component]
fn FilterBar(browser: SharedBrowser, client: PreciosRestClient) -> impl IntoView {
    let region_callback = |field: FilterField, browser: &SharedBrowser, client: &PreciosRestClient| {
        let browser = browser.clone();
        let client = client.clone();
        Callback::new(move |value: String| {
            browser.borrow_mut().select_filter(field, &value);
            spawn_local(fetch_and_commit(browser.clone(), client.clone()));
        })
    };

    let on_departamento = region_callback(FilterField::Departamento, &browser, &client);
    let on_provincia = region_callback(FilterField::Provincia, &browser, &client);
    let on_distrito = region_callback(FilterField::Distrito, &browser, &client);

    let on_tipo = {
        let browser = browser.clone();
        Callback::new(move |value: String| {
            let mut browser = browser.borrow_mut();
            browser.narrow_by_establishment(&value);
            publish(&browser);
        })
    };

    view! {
        <div class="filter-bar">
            <FilterSelect
                field=FilterField::Departamento
                label="Departamento"
                options=Signal::derive(move || snapshot_signal().get().options.departamentos)
                selected=Signal::derive(move || snapshot_signal().get().selections.departamento)
                on_select=on_departamento
            />
            <FilterSelect
                field=FilterField::Provincia
                label="Provincia"
                options=Signal::derive(move || snapshot_signal().get().options.provincias)
                selected=Signal::derive(move || snapshot_signal().get().selections.provincia)
                on_select=on_provincia
            />
            <FilterSelect
                field=FilterField::Distrito
                label="Distrito"
                options=Signal::derive(move || snapshot_signal().get().options.distritos)
                selected=Signal::derive(move || snapshot_signal().get().selections.distrito)
                on_select=on_distrito
            />
            <FilterSelect
                field=FilterField::TipoEstablecimiento
                label="Tipo de Establecimiento"
                options=Signal::derive(move || snapshot_signal().get().options.tipos_establecimiento)
                selected=Signal::derive(move || snapshot_signal().get().selections.tipo_establecimiento)
                on_select=on_tipo
            />
        </div>
    }
}

/// One selector with its repopulated option list and preserved selection
#[component]
fn FilterSelect(
    field: FilterField,
    label: &'static str,
    options: Signal<Vec<String>>,
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-item">
            <label for=field.selector_id().to_string()>{label}</label>
            <select
                id=field.selector_id().to_string()
                on:change=move |ev| on_select.call(event_target_value(&ev))
                prop:value=move || selected.get()
            >
                <option value="">"Todos"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|value| {
                            let text = value.clone();
                            view! { <option value=value>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Current page of the working set
#[component]
fn RecordTable() -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="records-table">
                <thead>
                    <tr>
                        <th>"Fecha"</th>
                        <th>"Departamento"</th>
                        <th>"Provincia"</th>
                        <th>"Distrito"</th>
                        <th>"Dirección"</th>
                        <th>"Razón Social"</th>
                        <th>"Tipo"</th>
                        <th>"Producto"</th>
                        <th>"Precio"</th>
                        <th>"Unidad"</th>
                    </tr>
                </thead>
                <tbody id="tablaPrecios">
                    {move || {
                        snapshot_signal()
                            .get()
                            .rows
                            .iter()
                            .map(|record| {
                                let cells = record.display_cells();
                                view! {
                                    <tr>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Sliding page window plus the "Mostrando ..." info line
#[component]
fn PaginationBar(browser: SharedBrowser) -> impl IntoView {
    let go_to = {
        let browser = browser.clone();
        Callback::new(move |page: usize| {
            let mut browser = browser.borrow_mut();
            if browser.go_to_page(page) {
                publish(&browser);
            }
        })
    };

    view! {
        <div class="pagination" id="paginacion">
            {move || {
                let snapshot = snapshot_signal().get();
                snapshot
                    .window
                    .iter()
                    .map(|item| pagination_item(*item, snapshot.current_page, go_to))
                    .collect_view()
            }}
        </div>
        <div class="pagination-info" id="infoPaginacion">
            {move || snapshot_signal().get().info_text}
        </div>
    }
}

fn pagination_item(item: PageItem, current_page: usize, go_to: Callback<usize>) -> View {
    match item {
        PageItem::Prev => view! {
            <button class="page-link" on:click=move |_| go_to.call(current_page - 1)>
                "Prev"
            </button>
        }
        .into_view(),
        PageItem::Next => view! {
            <button class="page-link" on:click=move |_| go_to.call(current_page + 1)>
                "Next"
            </button>
        }
        .into_view(),
        PageItem::Page(page) => {
            let class = if page == current_page { "page-link active" } else { "page-link" };
            view! {
                <button class=class on:click=move |_| go_to.call(page)>
                    {page}
                </button>
            }
            .into_view()
        }
        PageItem::Ellipsis => view! { <span class="page-ellipsis">"..."</span> }.into_view(),
    }
}

/// Shown for the duration of any fetch, hidden unconditionally afterward
#[component]
fn LoadingOverlay() -> impl IntoView {
    view! {
        <Show when=move || loading_signal().get() fallback=|| ()>
            <div class="loading-overlay" id="loading">
                <div class="loading-box">"Cargando..."</div>
            </div>
        </Show>
    }
}
