use crate::{create_test_config, serve, sitemap_index, urlset};
use calamine::{open_workbook, Reader, Xlsx};
use sitemap_sorter::output::COLUMNS;
use sitemap_sorter::sitemap::process_sitemap;
use sitemap_sorter::{Category, ParseError, SitemapError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::MockServer;

/// Reads an exported CSV file back as rows of strings (header included)
fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV");

    reader
        .records()
        .map(|record| {
            record
                .expect("Invalid CSV row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Reads the first worksheet of an exported XLSX file as rows of strings
fn read_xlsx_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open XLSX");
    let range = workbook
        .worksheet_range("Sheet1")
        .expect("Missing worksheet");

    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

async fn run_single_url(loc: &str) -> (Vec<Vec<String>>, TempDir) {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/sitemap.xml", urlset(&[(loc, None)]), 1).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("results.csv");

    let report = process_sitemap(
        &create_test_config(),
        &format!("{}/sitemap.xml", mock_server.uri()),
        Some(&output),
    )
    .await
    .expect("Pipeline failed");

    assert_eq!(report.path, output);
    (read_rows(&output), dir)
}

#[tokio::test]
async fn test_product_url() {
    let (rows, _dir) = run_single_url("https://example.com/products/widget/").await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["https://example.com/products/widget/", "product", ""]);
}

#[tokio::test]
async fn test_page_url() {
    let (rows, _dir) = run_single_url("https://example.com/about/").await;
    assert_eq!(rows[1][1], "page");
}

#[tokio::test]
async fn test_blog_url() {
    let (rows, _dir) = run_single_url("https://example.com/blogs/news/my-post/").await;
    assert_eq!(rows[1][1], "blog");
}

#[tokio::test]
async fn test_index_with_two_sub_sitemaps() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    serve(
        &mock_server,
        "/sitemap_index.xml",
        sitemap_index(&[
            format!("{}/sitemap-1.xml", base_url),
            format!("{}/sitemap-2.xml", base_url),
        ]),
        1,
    )
    .await;
    serve(
        &mock_server,
        "/sitemap-1.xml",
        urlset(&[("https://example.com/collections/summer", Some("2024-06-01"))]),
        1,
    )
    .await;
    serve(
        &mock_server,
        "/sitemap-2.xml",
        urlset(&[("https://example.com/products/hat", None)]),
        1,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("results.csv");

    let report = process_sitemap(
        &create_test_config(),
        &format!("{}/sitemap_index.xml", base_url),
        Some(&output),
    )
    .await
    .expect("Pipeline failed");

    let rows = read_rows(&output);
    assert_eq!(rows[0], COLUMNS.to_vec());
    assert_eq!(
        rows[1..].to_vec(),
        vec![
            vec!["https://example.com/collections/summer", "collection", "2024-06-01"],
            vec!["https://example.com/products/hat", "product", ""],
        ]
    );

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.count(Category::Collection), 1);
    assert_eq!(report.summary.count(Category::Product), 1);
}

#[tokio::test]
async fn test_row_count_matches_records() {
    let mock_server = MockServer::start().await;

    let locs: Vec<String> = (0..25)
        .map(|i| format!("https://example.com/products/item-{}", i))
        .collect();
    let entries: Vec<(&str, Option<&str>)> = locs.iter().map(|l| (l.as_str(), None)).collect();
    serve(&mock_server, "/sitemap.xml", urlset(&entries), 1).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("results.csv");

    process_sitemap(
        &create_test_config(),
        &format!("{}/sitemap.xml", mock_server.uri()),
        Some(&output),
    )
    .await
    .expect("Pipeline failed");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 26);
    assert!(rows[1..].iter().all(|row| row.len() == 3));
}

#[tokio::test]
async fn test_malformed_xml_writes_nothing() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        "/sitemap.xml",
        "<urlset><url><loc>oops</url>".to_string(),
        1,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("results.xlsx");

    let result = process_sitemap(
        &create_test_config(),
        &format!("{}/sitemap.xml", mock_server.uri()),
        Some(&output),
    )
    .await;

    assert!(matches!(result, Err(SitemapError::Parse(ParseError::Xml { .. }))));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_xlsx_output() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        "/sitemap.xml",
        urlset(&[("https://example.com/", None)]),
        1,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("results.xlsx");

    process_sitemap(
        &create_test_config(),
        &format!("{}/sitemap.xml", mock_server.uri()),
        Some(&output),
    )
    .await
    .expect("Pipeline failed");

    let rows = read_xlsx_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], COLUMNS.to_vec());
    assert_eq!(rows[1], vec!["https://example.com/", "page", ""]);
}
