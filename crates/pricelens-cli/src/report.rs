//! Plain-text rendering of a [`RunResult`].

use pricelens_scraper::{Offer, RunResult, UNIT_NOT_APPLICABLE};

const HEADERS: [&str; 4] = ["RETAILER", "PRODUCT", "PRICE", "UNIT PRICE"];

/// Renders the ranked table, or the appropriate "no results" message when
/// the run produced zero offers. Failure records are always listed so a
/// partial run shows which retailers dropped out.
pub fn format_run_result(result: &RunResult, query: &str) -> String {
    let mut out = String::new();

    if result.offers.is_empty() {
        if result.all_retailers_failed() {
            out.push_str(&format!("No prices found for \"{query}\".\n"));
            out.push_str("Every retailer came back empty:\n");
            for failure in &result.failures {
                out.push_str(&format!("  - {}: {}\n", failure.retailer, failure.reason));
            }
        } else {
            out.push_str("No retailers were searched.\n");
        }
        return out;
    }

    out.push_str(&format!("Found prices for: {query}\n\n"));
    out.push_str(&render_table(&result.offers));

    if !result.failures.is_empty() {
        out.push_str("\nSome retailers produced no offers:\n");
        for failure in &result.failures {
            out.push_str(&format!("  - {}: {}\n", failure.retailer, failure.reason));
        }
    }

    out
}

fn render_table(offers: &[Offer]) -> String {
    let rows: Vec<[String; 4]> = offers
        .iter()
        .map(|offer| {
            [
                offer.retailer.clone(),
                offer.product_name.clone(),
                format!("${:.2}", offer.price),
                unit_price_cell(offer),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(str::to_owned), &widths));
    out.push_str(&format_row(
        &widths.map(|w| "-".repeat(w)),
        &widths,
    ));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Right-pad all but the last column.
        if i < cells.len() - 1 {
            for _ in cell.chars().count()..*width {
                line.push(' ');
            }
        }
    }
    line.push('\n');
    line
}

fn unit_price_cell(offer: &Offer) -> String {
    match offer.unit_price {
        Some(unit_price) if offer.unit_label != UNIT_NOT_APPLICABLE => {
            format!("${unit_price:.2} {}", offer.unit_label)
        }
        Some(unit_price) => format!("${unit_price:.2} (n/a)"),
        None => "n/a".to_owned(),
    }
}
