// src/core/html.rs
//! Typed view over the parsed page.
//!
//! The page is a flat list of `<div class="car_block">` elements, each holding
//! one `<span class="...">` per field plus free text (the displacement sentence).
//! Extraction code talks to [`CarBlock`] and never builds selectors itself.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::RECORD_SELECTOR;

/// Sub-elements a car block is expected to carry, one `span` each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Mpg,
    Cylinders,
    HorsePower,
    Weight,
    Acceleration,
    Origin,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Mpg,
        Field::Cylinders,
        Field::HorsePower,
        Field::Weight,
        Field::Acceleration,
        Field::Origin,
    ];

    /// `class` attribute of the span holding this field.
    pub fn class(self) -> &'static str {
        match self {
            Field::Name => "car_name",
            Field::Mpg => "mpg",
            Field::Cylinders => "cylinders",
            Field::HorsePower => "horsepower",
            Field::Weight => "weight",
            Field::Acceleration => "acceleration",
            Field::Origin => "from",
        }
    }

    fn selector(self) -> &'static Selector {
        &SPAN_SELECTORS[self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(RECORD_SELECTOR).expect("record selector is valid CSS"));

// Indexed by `Field as usize`.
static SPAN_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    Field::ALL
        .iter()
        .map(|f| Selector::parse(&format!("span.{}", f.class())).expect("span selector is valid CSS"))
        .collect()
});

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// One record-node: a single car's markup block.
#[derive(Clone, Copy, Debug)]
pub struct CarBlock<'a> {
    el: ElementRef<'a>,
}

impl<'a> CarBlock<'a> {
    /// Every car block in document order.
    pub fn all(doc: &'a Html) -> impl Iterator<Item = CarBlock<'a>> + 'a {
        doc.select(&BLOCK_SELECTOR).map(|el| CarBlock { el })
    }

    /// Text content of the first span of the given field, if present.
    pub fn field_text(&self, field: Field) -> Option<String> {
        self.el
            .select(field.selector())
            .next()
            .map(|span| span.text().collect())
    }

    pub fn name(&self) -> Option<String> {
        self.field_text(Field::Name)
    }

    pub fn mpg(&self) -> Option<String> {
        self.field_text(Field::Mpg)
    }

    pub fn cylinders(&self) -> Option<String> {
        self.field_text(Field::Cylinders)
    }

    pub fn horsepower(&self) -> Option<String> {
        self.field_text(Field::HorsePower)
    }

    pub fn weight(&self) -> Option<String> {
        self.field_text(Field::Weight)
    }

    pub fn acceleration(&self) -> Option<String> {
        self.field_text(Field::Acceleration)
    }

    pub fn origin(&self) -> Option<String> {
        self.field_text(Field::Origin)
    }

    /// All text under the block, concatenated without separators.
    pub fn full_text(&self) -> String {
        self.el.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="car_block">
            <span class="car_name">chevrolet chevelle malibu</span>
            <span class="mpg">18.0 mpg</span>
            <span class="from">(1970, USA)</span>
            <p>Engine: <b>307.0</b> cubic inches</p>
          </div>
          <div class="other"><span class="car_name">ignored</span></div>
          <div class="car_block wide">
            <span class="car_name">buick <i>skylark</i> 320</span>
          </div>
        </body></html>
    "#;

    #[test]
    fn finds_blocks_in_document_order() {
        let doc = parse_document(PAGE);
        let names: Vec<_> = CarBlock::all(&doc).map(|b| b.name()).collect();
        assert_eq!(
            names,
            vec![Some(s!("chevrolet chevelle malibu")), Some(s!("buick skylark 320"))]
        );
    }

    #[test]
    fn missing_span_is_none() {
        let doc = parse_document(PAGE);
        let second = CarBlock::all(&doc).nth(1).unwrap();
        assert_eq!(second.mpg(), None);
        assert_eq!(second.origin(), None);
    }

    #[test]
    fn full_text_joins_nested_text() {
        let doc = parse_document(PAGE);
        let first = CarBlock::all(&doc).next().unwrap();
        assert!(first.full_text().contains("Engine: 307.0 cubic inches"));
        assert_eq!(first.origin().as_deref(), Some("(1970, USA)"));
    }

    #[test]
    fn field_classes() {
        assert_eq!(Field::HorsePower.class(), "horsepower");
        assert_eq!(Field::Origin.to_string(), "from");
        assert_eq!(SPAN_SELECTORS.len(), Field::ALL.len());
    }
}
