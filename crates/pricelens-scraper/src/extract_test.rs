use super::*;

fn selectors() -> Selectors {
    Selectors {
        item_container: "div.result".to_owned(),
        name: "h2 span.title".to_owned(),
        price: "span.price".to_owned(),
    }
}

fn result_card(name: &str, price: &str) -> String {
    format!(
        "<div class=\"result\">\
           <h2><span class=\"title\">{name}</span></h2>\
           <span class=\"price\">{price}</span>\
         </div>"
    )
}

#[test]
fn extracts_name_and_price_text() {
    let html = format!("<html><body>{}</body></html>", result_card("Schweppes Ginger Ale", "$6.00"));
    let extraction = extract_listings(&html, &selectors(), 5).unwrap();

    assert_eq!(extraction.containers_matched, 1);
    assert_eq!(
        extraction.listings,
        vec![RawListing {
            name_text: Some("Schweppes Ginger Ale".to_owned()),
            price_text: Some("$6.00".to_owned()),
        }]
    );
}

#[test]
fn caps_listings_at_max_items() {
    let cards: String = (0..20).map(|i| result_card(&format!("Item {i}"), "$1.00")).collect();
    let html = format!("<html><body>{cards}</body></html>");

    let extraction = extract_listings(&html, &selectors(), 5).unwrap();
    assert_eq!(extraction.listings.len(), 5);
    assert_eq!(extraction.containers_matched, 5);
    // Document order preserved.
    assert_eq!(extraction.listings[0].name_text.as_deref(), Some("Item 0"));
    assert_eq!(extraction.listings[4].name_text.as_deref(), Some("Item 4"));
}

#[test]
fn collapses_whitespace_across_text_nodes() {
    let html = "<html><body><div class=\"result\">\
        <h2><span class=\"title\">  Schweppes\n   <b>Ginger</b>\t Ale  </span></h2>\
        <span class=\"price\"> $6 <!-- split --> .00 </span>\
        </div></body></html>";

    let extraction = extract_listings(html, &selectors(), 5).unwrap();
    assert_eq!(
        extraction.listings[0].name_text.as_deref(),
        Some("Schweppes Ginger Ale")
    );
    assert_eq!(extraction.listings[0].price_text.as_deref(), Some("$6 .00"));
}

#[test]
fn container_with_neither_field_is_skipped_silently() {
    let html = "<html><body>\
        <div class=\"result\"><img src=\"sponsored.png\"></div>\
        <div class=\"result\">\
          <h2><span class=\"title\">Real Item</span></h2>\
          <span class=\"price\">$2.50</span>\
        </div>\
        </body></html>";

    let extraction = extract_listings(html, &selectors(), 5).unwrap();
    assert_eq!(extraction.containers_matched, 2);
    assert_eq!(extraction.listings.len(), 1);
    assert_eq!(extraction.listings[0].name_text.as_deref(), Some("Real Item"));
}

#[test]
fn container_with_only_price_is_kept() {
    let html = "<html><body><div class=\"result\">\
        <span class=\"price\">$3.99</span>\
        </div></body></html>";

    let extraction = extract_listings(html, &selectors(), 5).unwrap();
    assert_eq!(
        extraction.listings,
        vec![RawListing {
            name_text: None,
            price_text: Some("$3.99".to_owned()),
        }]
    );
}

#[test]
fn no_matching_containers_yields_empty_listings() {
    let html = "<html><body><p>Robot check</p></body></html>";
    let extraction = extract_listings(html, &selectors(), 5).unwrap();
    assert_eq!(extraction.containers_matched, 0);
    assert!(extraction.listings.is_empty());
}

#[test]
fn invalid_selector_is_reported() {
    let mut bad = selectors();
    bad.price = "span..".to_owned();
    let err = extract_listings("<html></html>", &bad, 5).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidSelector { ref selector, .. } if selector == "span.."));
}

#[test]
fn skipped_containers_still_count_against_the_cap() {
    // Two empty sponsored shells followed by four real cards, cap of 5:
    // only the first three real cards fit.
    let mut cards = String::new();
    cards.push_str("<div class=\"result\"></div><div class=\"result\"></div>");
    for i in 0..4 {
        cards.push_str(&result_card(&format!("Item {i}"), "$1.00"));
    }
    let html = format!("<html><body>{cards}</body></html>");

    let extraction = extract_listings(&html, &selectors(), 5).unwrap();
    assert_eq!(extraction.containers_matched, 5);
    assert_eq!(extraction.listings.len(), 3);
}
