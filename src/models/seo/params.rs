use serde::{Deserialize, Serialize};

/// Acceptance rule for one SEO parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    // inclusive on both ends
    Range { min: f64, max: f64 },
    AtLeast(f64),
    AtMost(f64),
    Exactly(f64),
    Expect(bool),
}

impl Rule {
    pub fn accepts(&self, observed: f64) -> bool {
        match *self {
            Rule::Range { min, max } => min <= observed && observed <= max,
            Rule::AtLeast(min) => observed >= min,
            Rule::AtMost(max) => observed <= max,
            Rule::Exactly(expected) => observed == expected,
            Rule::Expect(expected) => (observed != 0.0) == expected,
        }
    }

    pub fn accepts_count(&self, observed: usize) -> bool {
        self.accepts(observed as f64)
    }

    pub fn accepts_flag(&self, observed: bool) -> bool {
        match *self {
            Rule::Expect(expected) => observed == expected,
            _ => self.accepts(if observed { 1.0 } else { 0.0 }),
        }
    }
}

// Thresholds every audit is measured against. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalParams {
    pub keyword: String,
    pub title_length: Rule,
    pub meta_description_length: Rule,
    pub keyword_in_title: Rule,
    pub keyword_in_meta_description: Rule,
    pub h1: Rule,
    pub internal_links: Rule,
    pub content_length: Rule,
    pub alt_text_ratio: Rule,
    pub broken_links: Rule,
    pub viewport_meta_tag: Rule,
    pub page_load_time: Rule,
    pub url_structure: Rule,
    pub mobile_friendly: Rule,
    pub https: Rule,
    pub structured_data: Rule,
    pub keyword_density: Rule,
}

impl Default for OptimalParams {
    fn default() -> Self {
        Self {
            keyword: "SEO".to_string(),
            title_length: Rule::Range { min: 50.0, max: 60.0 },
            meta_description_length: Rule::Range {
                min: 150.0,
                max: 160.0,
            },
            keyword_in_title: Rule::Expect(true),
            keyword_in_meta_description: Rule::Expect(true),
            h1: Rule::Exactly(1.0),
            internal_links: Rule::AtLeast(10.0),
            content_length: Rule::AtLeast(300.0),
            alt_text_ratio: Rule::AtLeast(0.9),
            broken_links: Rule::AtMost(0.0),
            viewport_meta_tag: Rule::Expect(true),
            page_load_time: Rule::AtMost(2.0),
            url_structure: Rule::Expect(true),
            mobile_friendly: Rule::Expect(true),
            https: Rule::Expect(true),
            structured_data: Rule::Expect(true),
            keyword_density: Rule::Range { min: 1.0, max: 3.0 },
        }
    }
}
