//! Finds gallery images in concatenated page HTML.

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

/// Attribute the gallery puts on an image's container when the photographer is credited.
pub const AUTHOR_ATTR: &str = "data-autor";

/// One `<img>` from the gallery listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// `src` as found in the page; may be relative.
    pub src: String,
    /// Entity-decoded caption; empty when the tag has no `alt`.
    pub alt: String,
    /// Non-blank `data-autor` of the nearest enclosing `div`.
    pub author: Option<String>,
}

impl GalleryImage {
    /// Attributed images already carry a credit and are left alone.
    pub fn is_attributed(&self) -> bool {
        self.author.is_some()
    }
}

/// Extracts every image with a `src`, in document order.
pub fn extract_images(html: &str) -> Result<Vec<GalleryImage>> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("img").map_err(|e| anyhow::anyhow!("invalid img selector: {}", e))?;

    let mut images = Vec::new();
    for element in document.select(&selector) {
        let Some(src) = element.value().attr("src") else {
            tracing::debug!("skipping img without src");
            continue;
        };
        let alt = element.value().attr("alt").map(decode_caption).unwrap_or_default();
        images.push(GalleryImage {
            src: src.trim().to_string(),
            alt,
            author: container_author(&element),
        });
    }
    Ok(images)
}

/// `data-autor` of the closest `div` ancestor, if present and non-blank.
fn container_author(element: &ElementRef<'_>) -> Option<String> {
    let container = element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "div")?;
    container
        .value()
        .attr(AUTHOR_ATTR)
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .map(str::to_string)
}

/// The parser already decodes entities once; captions are sometimes
/// double-escaped upstream, leaving a literal `&quot;` behind.
fn decode_caption(alt: &str) -> String {
    alt.replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_src_alt_and_author() {
        let html = r#"
            <div class="foto" data-autor="Fulano de Tal"><img src="/a PEQ.jpg" alt="Sessão."></div>
            <div class="foto" data-autor=""><img src="/bPEQ.jpg" alt="Plenário."></div>
        "#;
        let images = extract_images(html).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].src, "/a PEQ.jpg");
        assert_eq!(images[0].author.as_deref(), Some("Fulano de Tal"));
        assert!(images[0].is_attributed());
        assert_eq!(images[1].alt, "Plenário.");
        assert!(!images[1].is_attributed());
    }

    #[test]
    fn blank_author_counts_as_unattributed() {
        let html = r#"<div data-autor="   "><img src="/x.jpg" alt="x"></div>"#;
        let images = extract_images(html).unwrap();
        assert_eq!(images[0].author, None);
    }

    #[test]
    fn nearest_div_wins() {
        let html = r#"
            <div data-autor="Outer Author">
              <div class="inner"><a href="/foto"><img src="/x.jpg" alt="x"></a></div>
            </div>
        "#;
        let images = extract_images(html).unwrap();
        assert_eq!(images.len(), 1);
        assert!(!images[0].is_attributed());
    }

    #[test]
    fn author_on_div_above_link() {
        let html = r#"<div data-autor="Maria"><a href="/f"><img src="/x.jpg"></a></div>"#;
        let images = extract_images(html).unwrap();
        assert_eq!(images[0].author.as_deref(), Some("Maria"));
        assert_eq!(images[0].alt, "");
    }

    #[test]
    fn img_without_div_or_src() {
        let html = r#"<p><img alt="no src"></p><span><img src="/lonely.jpg" alt="a"></span>"#;
        let images = extract_images(html).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "/lonely.jpg");
        assert!(!images[0].is_attributed());
    }

    #[test]
    fn decodes_entities_in_alt() {
        let html = r#"<div><img src="/x.jpg" alt="Projeto &quot;Escola Livre&quot; &amp; debate. Dep. Ana (PT-SP)"></div>
                      <div><img src="/y.jpg" alt="Evento &amp;quot;Tal&amp;quot;"></div>"#;
        let images = extract_images(html).unwrap();
        assert_eq!(
            images[0].alt,
            "Projeto \"Escola Livre\" & debate. Dep. Ana (PT-SP)"
        );
        assert_eq!(images[1].alt, "Evento \"Tal\"");
    }
}
