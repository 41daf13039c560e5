//! Product table view model, shared by all category tabs.

use crate::model::{Availability, Category, ProductRecord};
use crate::store::{CategoryState, LoadStatus};
use crate::table::{CategoryTabState, SortKey};
use crate::view::common::{ColorTag, PageInfo, TableViewModel, ViewCell, ViewRow};

/// Shown when a category has no rows to display.
pub const EMPTY_PLACEHOLDER: &str =
    "No data currently available. Try again shortly by pressing ctrl+R";

/// Shown in place of an empty availability code.
pub const AVAILABILITY_PENDING_TEXT: &str = "Please refresh";

pub const HEADERS: &[&str] = &["ID", "Name", "Colors", "Price", "Manufacturer", "Availability"];

/// Column widths; the last one is a minimum and stretches to the border.
const WIDTHS: &[u16] = &[26, 22, 20, 8, 14, 14];

const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_COLORS: usize = 2;
const COL_PRICE: usize = 3;
const COL_MANUFACTURER: usize = 4;
const COL_AVAILABILITY: usize = 5;

/// Availability → background color lookup table.
const AVAILABILITY_COLORS: &[(&str, ColorTag)] = &[
    ("INSTOCK", ColorTag::Green),
    ("LESSTHAN10", ColorTag::Amber),
    ("OUTOFSTOCK", ColorTag::Red),
];

pub fn column_count() -> usize {
    HEADERS.len()
}

pub fn availability_color(availability: &Availability) -> Option<ColorTag> {
    let code = availability.code();
    AVAILABILITY_COLORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, tag)| tag)
}

pub fn format_availability(availability: &Availability) -> String {
    if availability.is_unknown() {
        AVAILABILITY_PENDING_TEXT.to_string()
    } else {
        availability.code().to_string()
    }
}

pub fn format_colors(colors: &[String]) -> String {
    colors.join(", ")
}

/// Numeric text as the backend sent it; `f64` display drops a trailing `.0`.
pub fn format_price(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Cells of one record, in [`HEADERS`] order.
pub fn product_cells(record: &ProductRecord) -> Vec<ViewCell> {
    vec![
        ViewCell::plain(record.api_id.clone()),
        ViewCell::plain(record.name.clone()),
        ViewCell::plain(format_colors(&record.colors)),
        ViewCell::plain(format_price(record.price)),
        ViewCell::plain(record.manufacturer.clone()),
        ViewCell::tagged(
            format_availability(&record.availability),
            availability_color(&record.availability),
        ),
    ]
}

fn sort_key(record: &ProductRecord, col: usize) -> SortKey {
    match col {
        COL_ID => SortKey::String(record.api_id.clone()),
        COL_NAME => SortKey::String(record.name.clone()),
        COL_COLORS => SortKey::String(format_colors(&record.colors)),
        COL_PRICE => record.price.map_or(SortKey::Empty, SortKey::Float),
        COL_MANUFACTURER => SortKey::String(record.manufacturer.clone()),
        COL_AVAILABILITY => SortKey::String(format_availability(&record.availability)),
        _ => SortKey::Empty,
    }
}

/// Case-insensitive substring match over the displayed text columns.
fn matches_filter(record: &ProductRecord, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        record.api_id.as_str(),
        record.name.as_str(),
        record.manufacturer.as_str(),
        record.availability.code(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
        || record
            .colors
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
}

fn title(category: Category, state: &CategoryState) -> String {
    let status = match state.status() {
        LoadStatus::Pending => "loading…".to_string(),
        LoadStatus::Loaded(1) => "1 item".to_string(),
        LoadStatus::Loaded(n) => format!("{} items", n),
        LoadStatus::Failed(_) => "fetch failed".to_string(),
    };
    format!(" {} ({}) ", category.label(), status)
}

/// Builds the visible page of one category.
///
/// Row ids are indices into `state.items`. Rows are filtered, then sorted
/// (stable, so equal keys keep backend order), then paginated.
pub fn build_products_view(
    category: Category,
    state: &CategoryState,
    tab: &CategoryTabState,
) -> TableViewModel<usize> {
    let mut indices: Vec<usize> = match tab.filter.as_deref() {
        Some(f) => (0..state.items.len())
            .filter(|&i| matches_filter(&state.items[i], f))
            .collect(),
        None => (0..state.items.len()).collect(),
    };

    if let Some(col) = tab.sort_column {
        indices.sort_by(|&a, &b| {
            let cmp = sort_key(&state.items[a], col)
                .partial_cmp(&sort_key(&state.items[b], col))
                .unwrap_or(std::cmp::Ordering::Equal);
            if tab.sort_ascending { cmp } else { cmp.reverse() }
        });
    }

    let total_rows = indices.len();
    let range = tab.page_range(total_rows);
    let page = PageInfo {
        page: tab.page.min(tab.page_count(total_rows) - 1),
        page_count: tab.page_count(total_rows),
        total_rows,
        first_row: range.start,
    };

    let rows = indices[range]
        .iter()
        .map(|&i| ViewRow {
            id: i,
            cells: product_cells(&state.items[i]),
        })
        .collect();

    let placeholder = if total_rows > 0 {
        None
    } else if state.items.is_empty() {
        Some(EMPTY_PLACEHOLDER.to_string())
    } else {
        Some(format!(
            "No rows match filter '{}'",
            tab.filter.as_deref().unwrap_or_default()
        ))
    };

    TableViewModel {
        title: title(category, state),
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: tab.sort_column,
        sort_ascending: tab.sort_ascending,
        page,
        placeholder,
        notice: state.error.as_ref().map(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FetchError;

    fn record(id: &str, name: &str, price: Option<f64>, availability: &str) -> ProductRecord {
        ProductRecord {
            api_id: id.to_string(),
            name: name.to_string(),
            colors: vec![],
            price,
            manufacturer: "Acme".to_string(),
            availability: Availability::from_code(availability),
        }
    }

    fn loaded(items: Vec<ProductRecord>) -> CategoryState {
        let mut state = CategoryState::default();
        state.apply(Ok(items));
        state
    }

    fn texts(vm: &TableViewModel<usize>) -> Vec<Vec<String>> {
        vm.rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.text.clone()).collect())
            .collect()
    }

    #[test]
    fn ski_glove_row() {
        let state = loaded(vec![ProductRecord {
            api_id: "G1".to_string(),
            name: "Ski Glove".to_string(),
            colors: vec!["black".to_string()],
            price: Some(29.99),
            manufacturer: "Acme".to_string(),
            availability: Availability::LessThan10,
        }]);
        let vm = build_products_view(Category::Gloves, &state, &CategoryTabState::default());

        assert_eq!(vm.rows.len(), 1);
        assert_eq!(
            texts(&vm)[0],
            vec!["G1", "Ski Glove", "black", "29.99", "Acme", "LESSTHAN10"]
        );
        assert_eq!(vm.rows[0].cells[5].color, Some(ColorTag::Amber));
        assert!(vm.rows[0].cells[..5].iter().all(|c| c.color.is_none()));
        assert_eq!(vm.placeholder, None);
        assert_eq!(vm.title, " Gloves (1 item) ");
    }

    #[test]
    fn availability_text_and_colors() {
        assert_eq!(format_availability(&Availability::Unknown), "Please refresh");
        assert_eq!(format_availability(&Availability::InStock), "INSTOCK");
        assert_eq!(availability_color(&Availability::InStock), Some(ColorTag::Green));
        assert_eq!(availability_color(&Availability::LessThan10), Some(ColorTag::Amber));
        assert_eq!(availability_color(&Availability::OutOfStock), Some(ColorTag::Red));
        assert_eq!(availability_color(&Availability::Unknown), None);
        assert_eq!(
            availability_color(&Availability::Other("BACKORDER".to_string())),
            None
        );
        assert_eq!(
            format_availability(&Availability::Other("BACKORDER".to_string())),
            "BACKORDER"
        );
    }

    #[test]
    fn colors_are_comma_joined() {
        assert_eq!(format_colors(&["red".to_string(), "blue".to_string()]), "red, blue");
        assert_eq!(format_colors(&[]), "");
    }

    #[test]
    fn price_is_verbatim_numeric_text() {
        assert_eq!(format_price(Some(29.99)), "29.99");
        assert_eq!(format_price(Some(30.0)), "30");
        assert_eq!(format_price(Some(0.5)), "0.5");
        assert_eq!(format_price(None), "");
    }

    #[test]
    fn rows_summed_across_pages_equal_item_count() {
        let items: Vec<_> = (0..47)
            .map(|i| record(&format!("id{}", i), "x", Some(i as f64), "INSTOCK"))
            .collect();
        let state = loaded(items);
        let mut tab = CategoryTabState::new(10);

        let first = build_products_view(Category::Beanies, &state, &tab);
        assert_eq!(first.page.page_count, 5);
        assert_eq!(first.page.total_rows, 47);

        let mut total = 0;
        for page in 0..first.page.page_count {
            tab.page = page;
            let vm = build_products_view(Category::Beanies, &state, &tab);
            assert_eq!(vm.page.first_row, page * 10);
            total += vm.rows.len();
        }
        assert_eq!(total, 47);
    }

    #[test]
    fn out_of_range_page_is_clamped_in_view() {
        let state = loaded(vec![record("a", "x", None, ""), record("b", "y", None, "")]);
        let mut tab = CategoryTabState::new(10);
        tab.page = 9;
        let vm = build_products_view(Category::Gloves, &state, &tab);
        assert_eq!(vm.page.page, 0);
        assert_eq!(vm.rows.len(), 2);
    }

    #[test]
    fn empty_and_pending_show_placeholder() {
        let pending = CategoryState::default();
        let vm = build_products_view(Category::Facemasks, &pending, &CategoryTabState::default());
        assert_eq!(vm.placeholder.as_deref(), Some(EMPTY_PLACEHOLDER));
        assert_eq!(vm.title, " Facemasks (loading…) ");
        assert_eq!(vm.page.page_count, 1);

        let empty = loaded(Vec::new());
        let vm = build_products_view(Category::Facemasks, &empty, &CategoryTabState::default());
        assert!(vm.rows.is_empty());
        assert_eq!(vm.placeholder.as_deref(), Some(EMPTY_PLACEHOLDER));
        assert_eq!(vm.title, " Facemasks (0 items) ");
    }

    #[test]
    fn failed_fetch_shows_placeholder_and_notice() {
        let mut state = CategoryState::default();
        state.apply(Err(FetchError::status("/products/beanies/", 502)));
        let vm = build_products_view(Category::Beanies, &state, &CategoryTabState::default());

        assert_eq!(vm.placeholder.as_deref(), Some(EMPTY_PLACEHOLDER));
        assert_eq!(
            vm.notice.as_deref(),
            Some("GET /products/beanies/ failed: HTTP status 502")
        );
        assert_eq!(vm.title, " Beanies (fetch failed) ");
    }

    #[test]
    fn sort_by_price_descending_then_backend_order() {
        let state = loaded(vec![
            record("a", "x", Some(5.0), ""),
            record("b", "x", None, ""),
            record("c", "x", Some(20.0), ""),
        ]);
        let mut tab = CategoryTabState::default();
        tab.sort_column = Some(COL_PRICE);
        tab.sort_ascending = false;

        let ids: Vec<_> = build_products_view(Category::Gloves, &state, &tab)
            .rows
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 0, 1]);

        tab.sort_column = None;
        let ids: Vec<_> = build_products_view(Category::Gloves, &state, &tab)
            .rows
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn filter_matches_text_columns_case_insensitively() {
        let mut colored = record("c", "Scarf", None, "OUTOFSTOCK");
        colored.colors = vec!["Purple".to_string()];
        let state = loaded(vec![
            record("a", "Ski Glove", None, "INSTOCK"),
            record("b", "Beanie", None, "LESSTHAN10"),
            colored,
        ]);
        let mut tab = CategoryTabState::default();

        tab.set_filter(Some("GLOVE".to_string()));
        assert_eq!(build_products_view(Category::Gloves, &state, &tab).rows.len(), 1);

        tab.set_filter(Some("purple".to_string()));
        let vm = build_products_view(Category::Gloves, &state, &tab);
        assert_eq!(vm.rows[0].id, 2);

        tab.set_filter(Some("lessthan".to_string()));
        assert_eq!(build_products_view(Category::Gloves, &state, &tab).rows[0].id, 1);

        tab.set_filter(Some("nothing".to_string()));
        let vm = build_products_view(Category::Gloves, &state, &tab);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.placeholder.as_deref(), Some("No rows match filter 'nothing'"));
    }

    #[test]
    fn availability_sorts_by_displayed_text() {
        let state = loaded(vec![
            record("a", "x", None, "OUTOFSTOCK"),
            record("b", "x", None, ""),
            record("c", "x", None, "INSTOCK"),
            record("d", "x", None, "LESSTHAN10"),
        ]);
        let mut tab = CategoryTabState::default();
        tab.sort_column = Some(COL_AVAILABILITY);

        let vm = build_products_view(Category::Gloves, &state, &tab);
        let shown: Vec<&str> = vm.rows.iter().map(|r| r.cells[5].text.as_str()).collect();
        assert_eq!(shown, ["INSTOCK", "LESSTHAN10", "OUTOFSTOCK", "Please refresh"]);
    }
}
