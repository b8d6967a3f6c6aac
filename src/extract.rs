use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};

/// One table row as an ordered header-text → cell-text mapping.
pub type Record = Map<String, Value>;

/// The results table is matched on its full class attribute as one literal
/// string, not on class-set membership. Reordering the classes on the page
/// would stop this matching; that mirrors the page as it is served today.
const RESULTS_TABLE_SELECTOR: &str = r#"table[class="results-table table"]"#;

/// Extract plugin records from the search results page.
///
/// A missing table or a missing header row yields an empty vec, never an
/// error. Cells are paired with headers positionally: a short row produces a
/// short record, excess cells are dropped, and rows without any cells are
/// skipped entirely.
pub fn extract(html: &str) -> Vec<Record> {
    let table_sel = Selector::parse(RESULTS_TABLE_SELECTOR)
        .expect("CSS selector for results table should be valid");
    let header_sel =
        Selector::parse("thead th").expect("CSS selector for header cells should be valid");
    let row_sel = Selector::parse("tbody tr").expect("CSS selector for body rows should be valid");
    let cell_sel = Selector::parse("td").expect("CSS selector for cells should be valid");

    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&table_sel).next() else {
        return Vec::new();
    };

    let headers: Vec<String> = table.select(&header_sel).map(cell_text).collect();
    if headers.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for row in table.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        let record: Record = headers
            .iter()
            .cloned()
            .zip(cells.into_iter().map(Value::String))
            .collect();
        records.push(record);
    }
    records
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
