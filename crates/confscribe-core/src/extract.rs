use scraper::{ElementRef, Html, Selector};

use crate::{
    error::{ConfscribeError, Result},
    types::Presentation,
};

const CARD: &str = "div.resourceCard-content";
const TIME: &str = "div.resource-time-small";
const TYPE_LABEL: &str = "span.label";
const CATEGORIES: &str = "p.glue-label";
const TITLE: &str = "h5.glue-headline";
const IMAGE: &str = "img";
const SPAN: &str = "span";

/// Thumbnails served from this host carry the video id as their fifth
/// path segment.
const VIDEO_THUMB_PREFIX: &str = "https://i.ytimg.com/vi";

struct CardSelectors {
    card: Selector,
    time: Selector,
    type_label: Selector,
    categories: Selector,
    span: Selector,
    title: Selector,
    image: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        Self {
            card: selector(CARD),
            time: selector(TIME),
            type_label: selector(TYPE_LABEL),
            categories: selector(CATEGORIES),
            span: selector(SPAN),
            title: selector(TITLE),
            image: selector(IMAGE),
        }
    }
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect(css)
}

/// Parse the page snapshot into presentation records, in document order.
///
/// The page layout is assumed fixed: a card missing any of its expected
/// sub-elements is a structural error that aborts the whole parse.
pub fn extract_presentations(html: &str) -> Result<Vec<Presentation>> {
    let selectors = CardSelectors::new();
    let document = Html::parse_document(html);

    document
        .select(&selectors.card)
        .enumerate()
        .map(|(index, card)| extract_card(index, card, &selectors))
        .collect()
}

fn extract_card(
    index: usize,
    card: ElementRef<'_>,
    selectors: &CardSelectors,
) -> Result<Presentation> {
    let time = text_of(select_one(index, card, &selectors.time, TIME)?)
        .replace('\n', "")
        .trim()
        .to_string();

    let presentation_type = text_of(select_one(index, card, &selectors.type_label, TYPE_LABEL)?);

    // Separator glyphs between category labels are marked aria-hidden.
    let category_node = select_one(index, card, &selectors.categories, CATEGORIES)?;
    let categories = category_node
        .select(&selectors.span)
        .filter(|span| span.value().attr("aria-hidden").is_none())
        .map(text_of)
        .collect();

    let title = text_of(select_one(index, card, &selectors.title, TITLE)?);

    let image = select_one(index, card, &selectors.image, IMAGE)?;
    let srcset = image.value().attr("srcset").ok_or(ConfscribeError::MissingElement {
        index,
        selector: "img[srcset]",
    })?;

    Ok(Presentation {
        title,
        presentation_type,
        categories,
        video_id: video_id_from_thumbnail(srcset),
        time,
    })
}

/// Derive the video id from a thumbnail reference, if it points at the
/// recognized video host: `https://i.ytimg.com/vi/ABC123/default.jpg`
/// yields `ABC123`. Anything else yields `None`.
pub fn video_id_from_thumbnail(srcset: &str) -> Option<String> {
    if !srcset.starts_with(VIDEO_THUMB_PREFIX) {
        return None;
    }
    srcset.split('/').nth(4).map(str::to_string)
}

fn select_one<'a>(
    index: usize,
    card: ElementRef<'a>,
    selector: &Selector,
    css: &'static str,
) -> Result<ElementRef<'a>> {
    card.select(selector)
        .next()
        .ok_or(ConfscribeError::MissingElement { index, selector: css })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, srcset: &str) -> String {
        format!(
            r#"<div class="resourceCard-content">
              <div class="resource-time-small">
                9:00 AM - 9:30 AM
              </div>
              <span class="label">Keynote</span>
              <p class="glue-label"><span>AI &amp; ML</span><span aria-hidden="true">|</span><span>Data Analytics</span></p>
              <h5 class="glue-headline">{title}</h5>
              <img srcset="{srcset}">
            </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    #[test]
    fn one_record_per_card_in_document_order() {
        let html = page(&[
            card("Opening Keynote", "https://i.ytimg.com/vi/ABC123/default.jpg"),
            card("Closing Panel", "https://cdn.example.com/panel.jpg"),
        ]);

        let records = extract_presentations(&html).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Opening Keynote");
        assert_eq!(records[1].title, "Closing Panel");
    }

    #[test]
    fn base_fields_are_populated() {
        let html = page(&[card("Opening Keynote", "https://i.ytimg.com/vi/ABC123/default.jpg")]);
        let records = extract_presentations(&html).unwrap();

        let record = &records[0];
        assert_eq!(record.time, "9:00 AM - 9:30 AM");
        assert_eq!(record.presentation_type, "Keynote");
        assert_eq!(record.categories, vec!["AI & ML", "Data Analytics"]);
        assert_eq!(record.video_id.as_deref(), Some("ABC123"));
    }

    #[test]
    fn video_id_only_for_recognized_thumbnails() {
        let html = page(&[
            card("Recorded", "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"),
            card("Unrecorded", "https://cdn.example.com/still.jpg"),
        ]);
        let records = extract_presentations(&html).unwrap();

        assert_eq!(records[0].video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(records[1].video_id, None);
    }

    #[test]
    fn hidden_category_spans_are_excluded_in_order() {
        let html = page(&[card("Any", "https://cdn.example.com/x.jpg")]);
        let records = extract_presentations(&html).unwrap();
        assert_eq!(records[0].categories, vec!["AI & ML", "Data Analytics"]);
    }

    #[test]
    fn missing_title_is_a_structural_error() {
        let html = r#"<div class="resourceCard-content">
            <div class="resource-time-small">10:00 AM</div>
            <span class="label">Breakout</span>
            <p class="glue-label"><span>Security</span></p>
            <img srcset="https://i.ytimg.com/vi/XYZ/default.jpg">
        </div>"#;

        let err = extract_presentations(html).unwrap_err();
        match err {
            ConfscribeError::MissingElement { index, selector } => {
                assert_eq!(index, 0);
                assert_eq!(selector, TITLE);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn image_without_srcset_is_a_structural_error() {
        let html = r#"<div class="resourceCard-content">
            <div class="resource-time-small">10:00 AM</div>
            <span class="label">Breakout</span>
            <p class="glue-label"><span>Security</span></p>
            <h5 class="glue-headline">Zero Trust</h5>
            <img src="https://cdn.example.com/x.jpg">
        </div>"#;

        let err = extract_presentations(html).unwrap_err();
        assert!(matches!(
            err,
            ConfscribeError::MissingElement { selector: "img[srcset]", .. }
        ));
    }

    #[test]
    fn thumbnail_id_is_the_fifth_path_segment() {
        assert_eq!(
            video_id_from_thumbnail("https://i.ytimg.com/vi/ABC123/default.jpg").as_deref(),
            Some("ABC123")
        );
    }

    #[test]
    fn foreign_hosts_yield_no_id() {
        assert_eq!(video_id_from_thumbnail("https://cdn.example.com/vi/ABC123/x.jpg"), None);
        assert_eq!(video_id_from_thumbnail(""), None);
    }

    #[test]
    fn truncated_thumbnail_url_yields_no_id() {
        assert_eq!(video_id_from_thumbnail("https://i.ytimg.com/vi"), None);
    }
}
