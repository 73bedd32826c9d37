// src/scrape.rs
//! Batch driver: run the car spec over every record block of a page.

use scraper::Html;
use tracing::{debug, warn};

use crate::config::ExtractMode;
use crate::core::html::CarBlock;
use crate::progress::Progress;
use crate::specs::cars::{extract_record, FieldError, Record};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("car block #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: FieldError,
    },
}

/// A block that did not become a record (isolate mode only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFailure {
    /// Zero-based position of the block in the document.
    pub index: usize,
    pub error: FieldError,
}

/// Records in document order, plus whatever was skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    pub records: Vec<Record>,
    pub failures: Vec<RecordFailure>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }
}

/// Extract every `div.car_block` of `doc`.
///
/// In [`ExtractMode::Strict`] the first broken block aborts the batch and no
/// records are returned. In [`ExtractMode::Isolate`] broken blocks are
/// reported in [`Batch::failures`] and the rest are kept.
pub fn collect_cars(
    doc: &Html,
    mode: ExtractMode,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Batch, ScrapeError> {
    let blocks: Vec<CarBlock<'_>> = CarBlock::all(doc).collect();
    debug!(blocks = blocks.len(), ?mode, "car blocks found");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(blocks.len());
    }

    let mut batch = Batch { records: Vec::with_capacity(blocks.len()), failures: Vec::new() };

    for (index, block) in blocks.iter().enumerate() {
        match extract_record(block) {
            Ok(rec) => {
                batch.records.push(rec);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(index);
                }
            }
            Err(source) if mode == ExtractMode::Strict => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("aborting: car block #{index}: {source}"));
                    p.finish();
                }
                return Err(ScrapeError::Record { index, source });
            }
            Err(error) => {
                warn!(index, %error, "car block skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(index, &error.to_string());
                }
                batch.failures.push(RecordFailure { index, error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse_document;
    use crate::progress::NullProgress;

    fn block(name: &str, cylinders: &str) -> String {
        format!(
            r#"<div class="car_block">
                 <span class="car_name">{name}</span>
                 <span class="mpg">20.0 mpg</span>
                 <span class="cylinders">{cylinders}</span>
                 <span class="horsepower">95</span>
                 <span class="weight">2,372</span>
                 <span class="acceleration">15.0</span>
                 <span class="from">(1970, Japan)</span>
                 113.0 cubic inches
               </div>"#
        )
    }

    fn page(blocks: &[String]) -> Html {
        parse_document(&format!("<html><body>{}</body></html>", blocks.concat()))
    }

    #[derive(Default)]
    struct Recorder {
        begun: Option<usize>,
        done: Vec<usize>,
        failed: Vec<usize>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) {
            self.begun = Some(total);
        }

        fn item_done(&mut self, index: usize) {
            self.done.push(index);
        }

        fn item_failed(&mut self, index: usize, _reason: &str) {
            self.failed.push(index);
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn keeps_document_order() {
        let doc = page(&[block("a", "4"), block("b", "6"), block("c", "8")]);
        let batch = collect_cars(&doc, ExtractMode::Isolate, None).unwrap();
        let names: Vec<_> = batch.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(batch.first().map(|r| r.cylinders), Some(4));
        assert_eq!(batch.last().map(|r| r.cylinders), Some(8));
        assert!(batch.failures.is_empty());
    }

    #[test]
    fn strict_mode_aborts_on_first_bad_block() {
        let doc = page(&[block("a", "4"), block("b", "six"), block("c", "8")]);
        let err = collect_cars(&doc, ExtractMode::Strict, None).unwrap_err();
        let ScrapeError::Record { index, source } = err;
        assert_eq!(index, 1);
        assert!(matches!(source, FieldError::Invalid { field: "cylinders", .. }));
    }

    #[test]
    fn isolate_mode_skips_and_reports() {
        let doc = page(&[block("a", "4"), block("b", "six"), block("c", "8")]);
        let mut rec = Recorder::default();
        let batch = collect_cars(&doc, ExtractMode::Isolate, Some(&mut rec)).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].index, 1);

        assert_eq!(rec.begun, Some(3));
        assert_eq!(rec.done, vec![0, 2]);
        assert_eq!(rec.failed, vec![1]);
        assert!(rec.finished);
    }

    #[test]
    fn null_progress_changes_nothing() {
        let doc = page(&[block("a", "4"), block("b", "six")]);
        let silent = collect_cars(&doc, ExtractMode::Isolate, None).unwrap();
        let mut sink = NullProgress;
        let with_sink = collect_cars(&doc, ExtractMode::Isolate, Some(&mut sink)).unwrap();
        assert_eq!(silent, with_sink);
        assert_eq!(with_sink.failures.len(), 1);
    }

    #[test]
    fn page_without_blocks_is_empty() {
        let doc = parse_document("<html><body><p>nothing</p></body></html>");
        let batch = collect_cars(&doc, ExtractMode::Strict, None).unwrap();
        assert!(batch.is_empty());
        assert!(batch.first().is_none());
    }
}
