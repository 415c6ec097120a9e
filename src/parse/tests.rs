// Parse module tests.

use super::*;
use crate::opengraph::PropertyMap;
use crate::taxonomy::BaseType;
use crate::error_handling::OpenGraphError;
use scraper::Html;
use url::Url;

fn map(pairs: &[(&str, &str)]) -> PropertyMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_harvest_og_properties() {
    let html = r#"
        <html>
            <head>
                <meta property="og:title" content="The Rock" />
                <meta property="og:type" content="movie" />
                <meta property="og:url" content="https://www.imdb.com/title/tt0117500/" />
                <meta property="og:image" content="https://ia.media-imdb.com/rock.jpg" />
            </head>
        </html>
    "#;
    let document = Html::parse_document(html);
    let properties = harvest_properties(&document, false);
    assert_eq!(properties.len(), 4);
    assert_eq!(properties.get("title"), Some(&"The Rock".to_string()));
    assert_eq!(properties.get("type"), Some(&"movie".to_string()));
    assert!(properties.get("og:title").is_none());
}

#[test]
fn test_harvest_decodes_entities() {
    let html = r#"<html><head><meta property="og:title" content="Fish &amp; Chips &quot;Ltd&quot;"></head></html>"#;
    let document = Html::parse_document(html);
    let properties = harvest_properties(&document, false);
    assert_eq!(
        properties.get("title"),
        Some(&r#"Fish & Chips "Ltd""#.to_string())
    );
}

#[test]
fn test_harvest_ignores_non_og_properties() {
    let html = r#"<html><head>
        <meta property="article:author" content="Someone">
        <meta property="fb:app_id" content="123">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert!(harvest_properties(&document, true).is_empty());
}

#[test]
fn test_harvest_name_tags_only_when_mining() {
    let html = r#"<html><head>
        <meta name="description" content="Plain description">
        <meta name="og:site_name" content="IMDb">
    </head></html>"#;
    let document = Html::parse_document(html);

    let strict = harvest_properties(&document, false);
    assert!(strict.get("description").is_none());
    // name="og:..." is Open Graph markup in its XHTML form and always counts
    assert_eq!(strict.get("site_name"), Some(&"IMDb".to_string()));

    let mined = harvest_properties(&document, true);
    assert_eq!(
        mined.get("description"),
        Some(&"Plain description".to_string())
    );
    assert_eq!(mined.get("site_name"), Some(&"IMDb".to_string()));
}

#[test]
fn test_harvest_last_write_wins() {
    let html = r#"<html><head>
        <meta property="og:image" content="https://example.com/first.png">
        <meta property="og:image" content="https://example.com/second.png">
    </head></html>"#;
    let document = Html::parse_document(html);
    let properties = harvest_properties(&document, false);
    assert_eq!(
        properties.get("image"),
        Some(&"https://example.com/second.png".to_string())
    );
}

#[test]
fn test_harvest_missing_content_is_empty() {
    let html = r#"<html><head><meta property="og:title"></head></html>"#;
    let document = Html::parse_document(html);
    let properties = harvest_properties(&document, false);
    assert_eq!(properties.get("title"), Some(&String::new()));
}

#[test]
fn test_harvest_meta_in_body() {
    // Recursive search: meta elements outside <head> still count
    let html = r#"<html><body><div><meta property="og:type" content="article"></div></body></html>"#;
    let document = Html::parse_document(html);
    let properties = harvest_properties(&document, false);
    assert_eq!(properties.get("type"), Some(&"article".to_string()));
}

#[test]
fn test_validate_complete_map() {
    let properties = map(&[
        ("title", "t"),
        ("type", "website"),
        ("image", "i"),
        ("url", "u"),
    ]);
    assert!(validate_required(&properties, false).is_ok());
    assert!(missing_required(&properties).is_empty());
}

#[test]
fn test_validate_missing_image() {
    let properties = map(&[("title", "t"), ("type", "website"), ("url", "u")]);
    let err = validate_required(&properties, false).unwrap_err();
    match err {
        OpenGraphError::SpecificationViolation { missing } => {
            assert_eq!(missing, vec!["image".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validate_reports_all_missing_in_order() {
    let properties = map(&[("type", "website")]);
    assert_eq!(missing_required(&properties), vec!["title", "image", "url"]);
}

#[test]
fn test_validate_ignored() {
    assert!(validate_required(&PropertyMap::new(), true).is_ok());
}

#[test]
fn test_validate_checks_presence_not_value() {
    let properties = map(&[("title", ""), ("type", " "), ("image", ""), ("url", "")]);
    assert!(validate_required(&properties, false).is_ok());
}

#[test]
fn test_classify() {
    assert_eq!(classify("restaurant"), Some(BaseType::Business));
    assert_eq!(classify("article"), Some(BaseType::Website));
    assert_eq!(classify("public_figure"), Some(BaseType::Person));
    assert_eq!(classify("tv_show"), Some(BaseType::Product));
    assert_eq!(classify("spaceship"), None);
    assert_eq!(classify("page"), None);
    assert_eq!(classify("Restaurant"), None);
}

#[test]
fn test_taxonomy_has_no_overlapping_types() {
    assert!(find_overlapping_types().is_empty());
}

#[test]
fn test_mine_title_from_h1_when_declared_blank() {
    let html = r#"<html><head><meta property="og:title" content="  "></head>
        <body><h1>Breaking News</h1></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = harvest_properties(&document, true);
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("title"), Some(&"Breaking News".to_string()));
}

#[test]
fn test_mine_title_prefers_title_element() {
    let html = r#"<html><head><title>
        Page &amp; Title
    </title></head><body><h1>Heading</h1></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("title"), Some(&"Page & Title".to_string()));
}

#[test]
fn test_mine_title_skips_blank_title_element() {
    let html = r#"<html><head><title> </title></head><body><h1>Heading</h1></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("title"), Some(&"Heading".to_string()));
}

#[test]
fn test_mine_title_ignores_nested_h1() {
    let html = r#"<html><body><div><h1>Nested</h1></div></body></html>"#;
    let document = Html::parse_document(html);
    assert!(run_chain(&document, TITLE_CHAIN).is_none());
}

#[test]
fn test_mine_description_paragraph_before_div() {
    let html = r#"<html><body><div>Other</div><p>Lede text.</p></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert_eq!(
        properties.get("description"),
        Some(&"Lede text.".to_string())
    );
}

#[test]
fn test_mine_description_from_meta_any_case() {
    let html = r#"<html><head><meta name="Description" content=" From meta "></head>
        <body><p>Lede text.</p></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("description"), Some(&"From meta".to_string()));
}

#[test]
fn test_mine_description_skips_blank_meta() {
    let html = r#"<html><head><meta name="description" content="  "></head>
        <body><p>Lede text.</p></body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        run_chain(&document, DESCRIPTION_CHAIN),
        Some(("first <p>", "Lede text.".to_string()))
    );
}

#[test]
fn test_mine_description_empty_meta_content_falls_through() {
    let html = r#"<html><head><meta name="description" content=""></head>
        <body><p>Lede text.</p></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = harvest_properties(&document, true);
    assert_eq!(properties.get("description"), Some(&String::new()));
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("description"), Some(&"Lede text.".to_string()));
}

#[test]
fn test_mine_collapses_whitespace_in_element_text() {
    let html = "<html><body><h1>Breaking\n      <em>News</em>\t Today</h1></body></html>";
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert_eq!(
        properties.get("title"),
        Some(&"Breaking News Today".to_string())
    );
}

#[test]
fn test_mine_description_falls_back_to_div() {
    let html = r#"<html><body><p>   </p><div>Only <b>div</b>
        text</div></body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        run_chain(&document, DESCRIPTION_CHAIN),
        Some(("first <div>", "Only div text".to_string()))
    );
}

#[test]
fn test_mine_miss_leaves_property_unset() {
    let html = r#"<html><head></head><body></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    assert!(properties.is_empty());
}

#[test]
fn test_mine_keeps_declared_values() {
    let html = r#"<html><head><title>Other</title></head><body><p>Other</p></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = map(&[("title", "Declared"), ("description", "Declared too")]);
    mine_missing(&document, &mut properties);
    assert_eq!(properties.get("title"), Some(&"Declared".to_string()));
    assert_eq!(
        properties.get("description"),
        Some(&"Declared too".to_string())
    );
}

#[test]
fn test_mine_twice_is_idempotent() {
    let html = r#"<html><head><title>Title</title></head><body><p>Lede.</p></body></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    mine_missing(&document, &mut properties);
    let first = properties.clone();
    mine_missing(&document, &mut properties);
    assert_eq!(properties, first);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_mine_image_uses_declared_icon() {
    let html = r#"<html><head><link rel="icon" href="/favicon.png"></head></html>"#;
    let document = Html::parse_document(html);
    let mut properties = PropertyMap::new();
    let source = Url::parse("https://example.com/news/1").unwrap();
    mine_image(&document, &mut properties, &source);
    assert_eq!(
        properties.get("image"),
        Some(&"https://example.com/favicon.png".to_string())
    );
}

#[test]
fn test_mine_image_keeps_declared_image() {
    let document = Html::parse_document("<html></html>");
    let mut properties = map(&[("image", "https://cdn.example.com/a.jpg")]);
    let source = Url::parse("https://example.com/").unwrap();
    mine_image(&document, &mut properties, &source);
    assert_eq!(
        properties.get("image"),
        Some(&"https://cdn.example.com/a.jpg".to_string())
    );
}
