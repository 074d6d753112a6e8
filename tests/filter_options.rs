use precios_table_wasm::domain::price_registry::{FilterField, PriceRecord, RecordQueryService};

fn record(departamento: Option<&str>, tipo: Option<&str>) -> PriceRecord {
    PriceRecord {
        departamento: departamento.map(String::from),
        tipo_establecimiento: tipo.map(String::from),
        ..PriceRecord::default()
    }
}

#[test]
fn option_values_are_sorted_distinct_and_non_empty() {
    let records = vec![
        record(Some("LIMA"), None),
        record(Some("AREQUIPA"), None),
        record(Some("LIMA"), None),
        record(Some(""), None),
        record(None, None),
        record(Some("CUSCO"), None),
    ];

    let service = RecordQueryService::new();
    assert_eq!(
        service.distinct_values(&records, FilterField::Departamento),
        vec!["AREQUIPA", "CUSCO", "LIMA"]
    );
}

#[test]
fn each_field_draws_from_its_own_column() {
    let records = vec![record(Some("LIMA"), Some("GRIFO")), record(Some("PUNO"), Some("FARMACIA"))];

    let service = RecordQueryService::new();
    assert_eq!(
        service.distinct_values(&records, FilterField::TipoEstablecimiento),
        vec!["FARMACIA", "GRIFO"]
    );
}

#[test]
fn empty_set_yields_empty_options() {
    let service = RecordQueryService::new();
    assert!(service.distinct_values(&[], FilterField::Provincia).is_empty());
}
