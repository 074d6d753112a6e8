use precios_table_wasm::domain::price_registry::PriceRecord;

#[test]
fn decodes_the_registry_key_set() {
    let json = r#"{
        "FCHA_REGISTRO": "2025-05-01 10:30:00",
        "DEPARTAMENTO": "LIMA",
        "PROVINCIA": "LIMA",
        "DISTRITO": "MIRAFLORES",
        "DIRECCION": "AV. LARCO 345",
        "RAZON_SOCIAL": "GRIFO SAN PEDRO S.A.C.",
        "TIPO_ESTABLECIMIENTO": "GRIFO",
        "PRODUCTO": "DIESEL B5 S-50",
        "PRECIO_VENTA": 15.99,
        "UNIDAD_MEDIDA": "GALON"
    }"#;

    let record: PriceRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.fecha_registro.as_deref(), Some("2025-05-01 10:30:00"));
    assert_eq!(record.departamento.as_deref(), Some("LIMA"));
    assert_eq!(record.distrito.as_deref(), Some("MIRAFLORES"));
    assert_eq!(record.precio_venta.map(|p| p.value()), Some(15.99));
}

#[test]
fn absent_fields_render_as_empty_cells() {
    let record: PriceRecord = serde_json::from_str(r#"{"DEPARTAMENTO": "PUNO"}"#).unwrap();

    let cells = record.display_cells();
    assert_eq!(cells[1], "PUNO");
    assert_eq!(cells[0], "");
    assert_eq!(cells[8], "");
}

#[test]
fn sale_price_renders_with_two_decimals() {
    let record: PriceRecord = serde_json::from_str(r#"{"PRECIO_VENTA": 7.5}"#).unwrap();
    assert_eq!(record.display_cells()[8], "7.50");
}

#[test]
fn array_payloads_decode_element_by_element() {
    let json = r#"[{"DEPARTAMENTO": "LIMA"}, {}]"#;
    let records: Vec<PriceRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], PriceRecord::default());
}
