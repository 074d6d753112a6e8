use precios_table_wasm::application::RecordBrowser;
use precios_table_wasm::domain::browse::PageItem;
use precios_table_wasm::domain::price_registry::PriceRecord;

fn lima_record(index: usize) -> PriceRecord {
    PriceRecord {
        departamento: Some("LIMA".to_string()),
        producto: Some(format!("PRODUCTO {index}")),
        ..PriceRecord::default()
    }
}

fn tipo_record(tipo: &str) -> PriceRecord {
    PriceRecord { tipo_establecimiento: Some(tipo.to_string()), ..PriceRecord::default() }
}

#[test]
fn fifteen_records_render_ten_rows_and_pages_1_2_next() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded((0..15).map(lima_record).collect());

    let snapshot = browser.snapshot();
    assert_eq!(snapshot.rows.len(), 10);
    assert_eq!(snapshot.info_text, "Mostrando 1 a 10 de 15 registros");
    assert_eq!(snapshot.window, vec![PageItem::Page(1), PageItem::Page(2), PageItem::Next]);
    assert_eq!(snapshot.options.departamentos, vec!["LIMA"]);
}

#[test]
fn second_page_holds_the_remainder() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded((0..15).map(lima_record).collect());

    assert!(browser.go_to_page(2));

    let snapshot = browser.snapshot();
    assert_eq!(snapshot.rows.len(), 5);
    assert_eq!(snapshot.info_text, "Mostrando 11 a 15 de 15 registros");
    assert_eq!(snapshot.rows[0].producto.as_deref(), Some("PRODUCTO 10"));
}

#[test]
fn out_of_range_page_changes_nothing() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded((0..15).map(lima_record).collect());
    let before = browser.snapshot();

    assert!(!browser.go_to_page(0));
    assert!(!browser.go_to_page(7));
    assert_eq!(browser.snapshot(), before);
}

#[test]
fn reload_resets_to_page_one() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded((0..30).map(lima_record).collect());
    assert!(browser.go_to_page(3));

    browser.commit_loaded((0..30).map(lima_record).collect());
    assert_eq!(browser.current_page(), 1);
}

#[test]
fn selections_survive_reload_only_while_still_offered() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded(vec![tipo_record("GRIFO"), tipo_record("FARMACIA")]);
    browser.narrow_by_establishment("FARMACIA");

    browser.commit_loaded(vec![tipo_record("FARMACIA")]);
    assert_eq!(browser.snapshot().selections.tipo_establecimiento, "FARMACIA");

    browser.commit_loaded(vec![tipo_record("GRIFO")]);
    assert_eq!(browser.snapshot().selections.tipo_establecimiento, "");
}

#[test]
fn reload_does_not_reapply_establishment_narrowing() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded(vec![tipo_record("GRIFO"), tipo_record("FARMACIA")]);
    browser.narrow_by_establishment("FARMACIA");
    assert_eq!(browser.working_count(), 1);

    // The fresh response replaces the working set wholesale
    browser.commit_loaded(vec![tipo_record("GRIFO"), tipo_record("FARMACIA"), tipo_record("FARMACIA")]);
    assert_eq!(browser.working_count(), 3);
    assert_eq!(browser.snapshot().selections.tipo_establecimiento, "FARMACIA");
}

#[test]
fn empty_result_set_renders_an_empty_state() {
    let mut browser = RecordBrowser::new();
    browser.commit_loaded(Vec::new());

    let snapshot = browser.snapshot();
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.window.is_empty());
    assert_eq!(snapshot.info_text, "Mostrando 0 a 0 de 0 registros");
    assert_eq!(snapshot.total_pages, 0);
}
