// src/extract.rs
// Menu page → beers.
//
// Page layout (one block per beer):
//   <div class="menu-item">
//     <div class="menu-item-title">Name*</div>
//     <div class="menu-item-description">...</div>
//     <div class="menu-item-option">...</div>        (optional)
//     <span class="currency-sign">£</span>5.5        (strength follows the sign)
//   </div>

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::core::sanitize::{clean_title, leading_number};
use crate::error::ExtractError;
use crate::model::{Beer, Snapshot};

const ITEM: &str = "menu-item";
const TITLE: &str = "menu-item-title";
const DESCRIPTION: &str = "menu-item-description";
const OPTION: &str = "menu-item-option";
const CURRENCY: &str = "currency-sign";

struct MenuSelectors {
    item: Selector,
    title: Selector,
    description: Selector,
    option: Selector,
    currency: Selector,
}

impl MenuSelectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            item: class_selector(ITEM)?,
            title: class_selector(TITLE)?,
            description: class_selector(DESCRIPTION)?,
            option: class_selector(OPTION)?,
            currency: class_selector(CURRENCY)?,
        })
    }
}

fn class_selector(class: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(&join!(".", class)).map_err(|e| ExtractError::Selector {
        class,
        reason: e.to_string(),
    })
}

/// Parse every menu item in `doc`, keyed by normalized name.
/// Later items overwrite earlier ones with the same name.
pub fn extract(doc: &str) -> Result<Snapshot, ExtractError> {
    let mut beers = Snapshot::new();
    for beer in extract_items(doc)? {
        if let Some(prev) = beers.insert(beer.name.clone(), beer) {
            warn!("duplicate menu item {:?}; keeping the later one", prev.name);
        }
    }
    Ok(beers)
}

/// Parse every menu item in `doc`, in page order.
pub fn extract_items(doc: &str) -> Result<Vec<Beer>, ExtractError> {
    let sel = MenuSelectors::new()?;
    let html = Html::parse_document(doc);

    let mut out = Vec::new();
    for (index, block) in html.select(&sel.item).enumerate() {
        out.push(parse_item(&sel, index, block)?);
    }
    debug!("extracted {} menu items", out.len());
    Ok(out)
}

fn parse_item(
    sel: &MenuSelectors,
    index: usize,
    block: ElementRef<'_>,
) -> Result<Beer, ExtractError> {
    let title = required(block, &sel.title, index, TITLE)?;
    let name = clean_title(&text_of(title));

    let description = s!(text_of(required(block, &sel.description, index, DESCRIPTION)?).trim());

    let qualifier = block
        .select(&sel.option)
        .next()
        .map(|el| s!(text_of(el).trim()))
        .filter(|q| !q.is_empty());

    let marker = required(block, &sel.currency, index, CURRENCY)?;
    let strength = strength_after(block, marker, &name)?;

    Ok(Beer { name, description, qualifier, strength })
}

fn required<'a>(
    block: ElementRef<'a>,
    selector: &Selector,
    index: usize,
    class: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    block
        .select(selector)
        .next()
        .ok_or(ExtractError::MissingElement { index, class })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First non-blank text after the currency sign (outside the sign itself),
/// staying within the block, then its leading number.
fn strength_after(
    block: ElementRef<'_>,
    marker: ElementRef<'_>,
    name: &str,
) -> Result<f64, ExtractError> {
    let marker_id = marker.id();

    let text = block
        .descendants()
        .skip_while(|n| n.id() != marker_id)
        .skip(1)
        .filter(|n| !n.ancestors().any(|a| a.id() == marker_id))
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .find(|t| !t.trim().is_empty())
        .ok_or_else(|| ExtractError::MissingStrength { name: s!(name) })?;

    leading_number(text).ok_or_else(|| ExtractError::BadStrength {
        name: s!(name),
        text: s!(text.trim()),
    })
}
