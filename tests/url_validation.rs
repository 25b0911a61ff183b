use phish_corpus::ingestion::csv::{read_table_from_bytes, read_table_from_path};
use phish_corpus::types::{Channel, Label, RawTable};
use phish_corpus::validate::{ChannelValidator, UrlValidator};

fn validate_bytes(input: &[u8]) -> Result<phish_corpus::types::ValidatedDataset, phish_corpus::RejectionReason> {
    let table = read_table_from_bytes(input)?;
    UrlValidator::default().validate(&table)
}

#[test]
fn validates_fixture_file() {
    let table = read_table_from_path("tests/fixtures/urls.csv").unwrap();
    let dataset = UrlValidator::default().validate(&table).unwrap();

    assert_eq!(dataset.channel, Channel::Url);
    assert_eq!(dataset.records.len(), 4);
    assert_eq!(dataset.dropped_unlabeled, 0);
    assert!(dataset.records.iter().all(|r| r.source == Channel::Url));
}

#[test]
fn rewrites_urls_into_tokens() {
    let dataset = validate_bytes(b"url,label\nhttp://www.paypal.com/login,phishing\n").unwrap();
    assert_eq!(dataset.records[0].text, "paypal com login");
    assert_eq!(dataset.records[0].label, Label::Malicious);
}

#[test]
fn rejects_missing_columns_listing_what_was_seen() {
    // "urlish" is a superstring of "url" and must not resolve.
    let err = validate_bytes(b"urlish,label\nhttp://a.com,1\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing text column"));
    assert!(msg.contains("urlish"));
    assert!(msg.contains("\"url\""));
}

#[test]
fn rejects_numeric_text_column_naming_it() {
    let err = validate_bytes(b"url,label\n123,1\n456.7,0\n-8,1\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("column 'url'"));
    assert!(msg.contains("numeric"));
}

#[test]
fn rejects_empty_text_column() {
    let err = validate_bytes(b"url,label\n,1\n,0\n").unwrap_err();
    assert!(err.to_string().contains("column 'url'"));
}

#[test]
fn accepts_mixed_numeric_and_textual_values() {
    let dataset = validate_bytes(b"url,label\n123,1\nexample.com/a,0\n").unwrap();
    assert_eq!(dataset.records.len(), 2);
}

#[test]
fn drops_rows_with_unresolvable_labels() {
    let dataset =
        validate_bytes(b"url,label\nhttp://a.com,phishing\nhttp://b.com,maybe\nhttp://c.com,0\n")
            .unwrap();
    assert_eq!(dataset.records.len(), 2);
    assert_eq!(dataset.dropped_unlabeled, 1);
}

#[test]
fn signed_label_convention_resolves_via_fallback() {
    let dataset = validate_bytes(b"url,label\nhttp://a.com,-1\nhttp://b.com,1\n").unwrap();
    // -1 is malicious via the fallback; 1 stays malicious via the primary table.
    assert_eq!(dataset.records[0].label, Label::Malicious);
    assert_eq!(dataset.records[1].label, Label::Malicious);
}

fn oversized_table(rows: usize) -> RawTable {
    let data = (0..rows)
        .map(|i| {
            vec![
                format!("http://www.site{i}.com/path/login"),
                if i % 2 == 0 { "0" } else { "1" }.to_string(),
            ]
        })
        .collect();
    RawTable::new(vec!["url".to_string(), "label".to_string()], data)
}

#[test]
fn samples_oversized_datasets_to_the_cap() {
    let table = oversized_table(150_000);
    let dataset = UrlValidator::default().validate(&table).unwrap();
    assert_eq!(dataset.records.len(), 100_000);
}

#[test]
fn sampling_is_deterministic_across_runs() {
    let table = oversized_table(120_000);
    let validator = UrlValidator::default();
    let first = validator.validate(&table).unwrap();
    let second = validator.validate(&table).unwrap();
    assert_eq!(first.records, second.records);
}

#[test]
fn datasets_at_or_below_the_cap_are_untouched() {
    let table = oversized_table(500);
    let dataset = UrlValidator::default().validate(&table).unwrap();
    assert_eq!(dataset.records.len(), 500);
    // Order preserved when no sampling happens.
    assert_eq!(dataset.records[0].text, "site0 com path login");
}
