use crate::domain::browse::{PageItem, Paginator};
use crate::domain::errors::FetchResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::price_registry::{
    FilterField, PriceRecord, RecordQueryService, RecordRepository, RegionFilter,
};

/// Use Case: fetch the record set matching the active region filter
pub struct LoadRecordsUseCase<R: RecordRepository> {
    repository: R,
}

impl<R: RecordRepository> LoadRecordsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, region: &RegionFilter) -> FetchResult<Vec<PriceRecord>> {
        get_logger().info(
            LogComponent::Application("LoadRecords"),
            &format!("📡 Loading records ({} region parameters)", region.query_pairs().len()),
        );

        let records = self.repository.fetch_records(region).await?;

        get_logger().info(
            LogComponent::Application("LoadRecords"),
            &format!("✅ {} records loaded", records.len()),
        );

        Ok(records)
    }
}

/// Current value of each filter selector; an empty string means "all"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelections {
    pub departamento: String,
    pub provincia: String,
    pub distrito: String,
    pub tipo_establecimiento: String,
}

impl FilterSelections {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Departamento => &self.departamento,
            FilterField::Provincia => &self.provincia,
            FilterField::Distrito => &self.distrito,
            FilterField::TipoEstablecimiento => &self.tipo_establecimiento,
        }
    }

    pub fn set(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Departamento => &mut self.departamento,
            FilterField::Provincia => &mut self.provincia,
            FilterField::Distrito => &mut self.distrito,
            FilterField::TipoEstablecimiento => &mut self.tipo_establecimiento,
        };
        *slot = value.to_string();
    }

    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter::from_selections(&self.departamento, &self.provincia, &self.distrito)
    }

    /// Drop any selection that is no longer offered by its option list
    fn retain_available(&mut self, options: &SelectorOptions) {
        use strum::IntoEnumIterator;
        for field in FilterField::iter() {
            let selected = self.get(field);
            if !selected.is_empty() && !options.get(field).iter().any(|v| v == selected) {
                self.set(field, "");
            }
        }
    }
}

/// Option lists for the four selectors, rebuilt after every successful fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorOptions {
    pub departamentos: Vec<String>,
    pub provincias: Vec<String>,
    pub distritos: Vec<String>,
    pub tipos_establecimiento: Vec<String>,
}

impl SelectorOptions {
    pub fn get(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Departamento => &self.departamentos,
            FilterField::Provincia => &self.provincias,
            FilterField::Distrito => &self.distritos,
            FilterField::TipoEstablecimiento => &self.tipos_establecimiento,
        }
    }
}

/// DTO handed to the rendering layer; the UI shows nothing else
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    pub rows: Vec<PriceRecord>,
    pub info_text: String,
    pub window: Vec<PageItem>,
    pub current_page: usize,
    pub total_pages: usize,
    pub options: SelectorOptions,
    pub selections: FilterSelections,
}

/// The single owner of browse state: loaded set, working set, page position
/// and filter selections. Render and fetch paths receive it by reference;
/// nothing about the browse position is ambient.
pub struct RecordBrowser {
    loaded: Vec<PriceRecord>,
    working: Vec<PriceRecord>,
    paginator: Paginator,
    selections: FilterSelections,
    options: SelectorOptions,
    query_service: RecordQueryService,
}

impl Default for RecordBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBrowser {
    pub fn new() -> Self {
        Self {
            loaded: Vec::new(),
            working: Vec::new(),
            paginator: Paginator::new(0),
            selections: FilterSelections::default(),
            options: SelectorOptions::default(),
            query_service: RecordQueryService::new(),
        }
    }

    /// Record a selector change; region fetches are issued by the caller
    pub fn select_filter(&mut self, field: FilterField, value: &str) {
        self.selections.set(field, value);
    }

    pub fn region_filter(&self) -> RegionFilter {
        self.selections.region_filter()
    }

    /// Replace the loaded set wholesale after a successful fetch
    ///
    /// Rebuilds all four option lists from the fresh set, keeps each previous
    /// selection only while it still exists, and snaps back to page 1. The
    /// establishment-type narrowing is not re-applied: the table shows the
    /// raw response until the user narrows again.
    pub fn commit_loaded(&mut self, records: Vec<PriceRecord>) {
        self.options = SelectorOptions {
            departamentos: self.query_service.distinct_values(&records, FilterField::Departamento),
            provincias: self.query_service.distinct_values(&records, FilterField::Provincia),
            distritos: self.query_service.distinct_values(&records, FilterField::Distrito),
            tipos_establecimiento: self
                .query_service
                .distinct_values(&records, FilterField::TipoEstablecimiento),
        };
        self.selections.retain_available(&self.options);

        self.working = records.clone();
        self.loaded = records;
        self.paginator.reset(self.working.len());

        get_logger().info(
            LogComponent::Application("RecordBrowser"),
            &format!("📊 Working set replaced: {} records", self.working.len()),
        );
    }

    /// Client-side narrowing; never touches the network
    pub fn narrow_by_establishment(&mut self, tipo: &str) {
        self.selections.set(FilterField::TipoEstablecimiento, tipo);
        self.working = self.query_service.narrow_by_establishment(&self.loaded, tipo);
        self.paginator.reset(self.working.len());
    }

    /// Page change, ignored outside `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to(page)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn working_count(&self) -> usize {
        self.working.len()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn info_text(&self) -> String {
        self.paginator.info_text()
    }

    /// Project the state into the DTO the UI renders
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            rows: self.paginator.slice(&self.working).to_vec(),
            info_text: self.paginator.info_text(),
            window: self.paginator.window(),
            current_page: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(),
            options: self.options.clone(),
            selections: self.selections.clone(),
        }
    }
}
