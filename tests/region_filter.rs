use precios_table_wasm::domain::price_registry::{FilterField, RegionFilter};

#[test]
fn query_pairs_skip_empty_fields_and_keep_order() {
    let region = RegionFilter::from_selections("LIMA", "", "MIRAFLORES");
    assert_eq!(region.query_pairs(), vec![("departamento", "LIMA"), ("distrito", "MIRAFLORES")]);
}

#[test]
fn all_empty_selections_mean_no_filtering() {
    let region = RegionFilter::from_selections("", "", "");
    assert!(region.is_empty());
    assert_eq!(region, RegionFilter::default());
}

#[test]
fn selector_ids_match_the_dom_contract() {
    assert_eq!(FilterField::Departamento.selector_id(), "departamento");
    assert_eq!(FilterField::Provincia.selector_id(), "provincia");
    assert_eq!(FilterField::Distrito.selector_id(), "distrito");
    assert_eq!(FilterField::TipoEstablecimiento.selector_id(), "tipoEstablecimiento");
}

#[test]
fn only_region_fields_become_query_parameters() {
    assert!(FilterField::Departamento.is_region());
    assert!(FilterField::Provincia.is_region());
    assert!(FilterField::Distrito.is_region());
    assert!(!FilterField::TipoEstablecimiento.is_region());
    assert_eq!(FilterField::TipoEstablecimiento.query_key(), None);
    assert_eq!(FilterField::Provincia.query_key(), Some("provincia"));
}
