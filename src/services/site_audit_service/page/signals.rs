use kuchiki::iter::NodeIterator;
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

// Everything the checks need from the document, detached from the DOM so it
// can be carried across awaits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSignals {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Counts of h1..h6, index 0 is h1.
    pub heading_counts: [usize; 6],
    /// Raw `href` values of every `<a href>`, in document order.
    pub hrefs: Vec<String>,
    pub visible_text: String,
    pub images_total: usize,
    pub images_with_alt: usize,
    pub has_viewport: bool,
    pub has_structured_data: bool,
}

impl PageSignals {
    pub fn h1_count(&self) -> usize {
        self.heading_counts[0]
    }
}

pub fn extract_signals(html: &str) -> PageSignals {
    let document = kuchiki::parse_html().one(html);
    let (images_total, images_with_alt) = image_alt_tally(&document);

    PageSignals {
        title: document
            .select_first("title")
            .ok()
            .map(|title| title.as_node().text_contents()),
        meta_description: meta_content(&document, "description"),
        heading_counts: heading_counts(&document),
        hrefs: link_targets(&document),
        visible_text: visible_text(&document),
        images_total,
        images_with_alt,
        has_viewport: count(&document, "meta[name=\"viewport\"]") > 0,
        has_structured_data: count(&document, "script[type=\"application/ld+json\"]") > 0,
    }
}

fn count(document: &NodeRef, selector: &str) -> usize {
    document
        .select(selector)
        .map(|found| found.count())
        .unwrap_or(0)
}

// A description tag without `content` reads as an empty description.
fn meta_content(document: &NodeRef, name: &str) -> Option<String> {
    let meta = document
        .select_first(&format!("meta[name=\"{}\"]", name))
        .ok()?;
    let attributes = meta.attributes.borrow();
    Some(attributes.get("content").unwrap_or_default().to_string())
}

fn heading_counts(document: &NodeRef) -> [usize; 6] {
    let mut counts = [0; 6];
    for (index, slot) in counts.iter_mut().enumerate() {
        *slot = count(document, &format!("h{}", index + 1));
    }
    counts
}

fn link_targets(document: &NodeRef) -> Vec<String> {
    let Ok(links) = document.select("a[href]") else {
        return Vec::new();
    };
    links
        .filter_map(|link| {
            let attributes = link.attributes.borrow();
            let href = attributes.get("href").map(|href| href.to_string());
            href
        })
        .collect()
}

fn image_alt_tally(document: &NodeRef) -> (usize, usize) {
    let Ok(images) = document.select("img") else {
        return (0, 0);
    };
    images.fold((0, 0), |(total, with_alt), image| {
        let has_alt = image
            .attributes
            .borrow()
            .get("alt")
            .is_some_and(|alt| !alt.is_empty());
        (total + 1, with_alt + usize::from(has_alt))
    })
}

fn visible_text(document: &NodeRef) -> String {
    let mut text = String::new();
    for node in document.descendants().text_nodes() {
        if inside_raw_text_element(node.as_node()) {
            continue;
        }
        text.push_str(&node.borrow());
    }
    text
}

fn inside_raw_text_element(node: &NodeRef) -> bool {
    node.parent()
        .map(|parent| {
            parent.as_element().is_some_and(|element| {
                matches!(&*element.name.local, "script" | "style" | "template")
            })
        })
        .unwrap_or(false)
}
