// End-to-end extraction over generated PDFs
mod common;

use research_glossary::pdf_extraction::{extract_document_text, get_page_count, load_pdf, page_texts};
use research_glossary::storage::{read_entries, write_entries};
use research_glossary::{ExtractionSettings, GlossaryExtractor};
use tempfile::tempdir;

use common::{write_pdf, GLOSSARY_PAGES};

#[test]
fn every_page_yields_a_text_block() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir().unwrap();
    let path = write_pdf(dir.path(), "glossary.pdf", GLOSSARY_PAGES);

    let doc = load_pdf(&path).unwrap();
    assert_eq!(get_page_count(&doc), 3);

    let pages = page_texts(&doc);
    assert_eq!(pages.len(), 3);
    assert!(pages[0].contains("Sampling"));
    assert!(pages[1].trim().is_empty());
    assert!(pages[2].contains("Bias"));
}

#[test]
fn joined_text_keeps_page_order() {
    let dir = tempdir().unwrap();
    let path = write_pdf(dir.path(), "glossary.pdf", GLOSSARY_PAGES);

    let text = extract_document_text(&path).unwrap();
    let sampling = text.find("Sampling").unwrap();
    let bias = text.find("Bias").unwrap();
    assert!(sampling < bias);
}

#[test]
fn glossary_entries_from_pdf() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir().unwrap();
    let path = write_pdf(dir.path(), "glossary.pdf", GLOSSARY_PAGES);

    let extractor = GlossaryExtractor::new(&ExtractionSettings::default());
    let entries = extractor.extract_pdf(&path).unwrap();

    let terms: Vec<&str> = entries.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Sampling", "Bias"]);
    assert_eq!(entries[0].definition, "Selecting a subset of a population for study.");
    assert_eq!(entries[1].definition, "A systematic error, see for details.");
    assert_eq!(entries[1].letter, "B");
}

#[test]
fn output_file_round_trips() {
    let dir = tempdir().unwrap();
    let pdf = write_pdf(dir.path(), "glossary.pdf", GLOSSARY_PAGES);
    let out = dir.path().join("index.json");

    let extractor = GlossaryExtractor::new(&ExtractionSettings::default());
    let entries = extractor.extract_pdf(&pdf).unwrap();
    write_entries(&out, &entries).unwrap();

    assert_eq!(read_entries(&out).unwrap(), entries);
}

#[test]
fn missing_pdf_is_an_error() {
    let dir = tempdir().unwrap();
    let extractor = GlossaryExtractor::new(&ExtractionSettings::default());
    assert!(extractor.extract_pdf(&dir.path().join("absent.pdf")).is_err());
}
