// src/specs/combinations.rs
//! One page of layering results for a glaze in a given position.
//!
//! Cards: `.card-combination.title-link-parent`
//!   image  `.card-combination__image img` (`data-src`, lazy-loaded; else `src`)
//!   link   `.title-link.text-reset` (`href` = detail page `<top>-over-<bottom>`)
//! Pagination: `.page-link` anchors; we continue only if one of them points
//! at exactly `page + 1`.

use scraper::Html;

use crate::combo::Combination;
use crate::config::consts::{CARD, CARD_IMAGE, CARD_LINK, PAGE_LINK};
use crate::config::options::{Position, ScrapeOptions};
use crate::core::html::{first_attr, selector};
use crate::core::{net, PageSource};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinationPage {
    pub combos: Vec<Combination>,
    pub has_next: bool,
}

pub fn fetch(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    position: Position,
    glaze_id: &str,
    page: u32,
) -> Result<CombinationPage> {
    let url = opts.combinations_url(position, glaze_id, page);
    let doc = source.get(&opts.proxied(&url))?;
    parse(&doc, &url, page)
}

/// `page_url` is the un-proxied URL the document came from; relative
/// pagination hrefs are resolved against it.
pub fn parse(doc: &str, page_url: &str, page: u32) -> Result<CombinationPage> {
    let html = Html::parse_document(doc);
    let card_sel = selector(CARD)?;
    let image_sel = selector(CARD_IMAGE)?;
    let link_sel = selector(CARD_LINK)?;
    let page_sel = selector(PAGE_LINK)?;

    let mut combos = Vec::new();
    for card in html.select(&card_sel) {
        let image = card.select(&image_sel).next();
        let link = card.select(&link_sel).next();
        let (Some(image), Some(link)) = (image, link) else { continue };
        let Some(href) = link.value().attr("href") else {
            logd!("Card without href on {page_url}");
            continue;
        };
        let image_url = first_attr(image, &["data-src", "src"]).map(str::to_owned);
        combos.push(Combination::new(href.trim(), image_url));
    }

    let next = page + 1;
    let has_next = html
        .select(&page_sel)
        .filter_map(|a| a.value().attr("href"))
        .any(|href| links_to_page(page_url, href, next));

    Ok(CombinationPage { combos, has_next })
}

fn links_to_page(page_url: &str, href: &str, page: u32) -> bool {
    let Ok(url) = net::resolve(page_url, href) else { return false };
    url.query_pairs()
        .any(|(k, v)| k == "page" && v.parse::<u32>().ok() == Some(page))
}
