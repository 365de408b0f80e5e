use crate::models::seo::{CellValue, OptimalParams, ReportRow, Status};
use crate::services::site_audit_service::compute::density::{contains_keyword, keyword_density};
use crate::services::site_audit_service::page::PageSignals;
use crate::utils::{has_path_separator, is_https, is_internal};
use std::time::Duration;

pub const NO_TITLE: &str = "No title found";
pub const NO_META_DESCRIPTION: &str = "No meta description found";

/// Run every check against an already parsed page and return one row per
/// check, in report order.
pub fn evaluate(
    signals: &PageSignals,
    url: &str,
    load_time: Duration,
    broken_links: usize,
    params: &OptimalParams,
) -> Vec<ReportRow> {
    let keyword = params.keyword.as_str();
    let title = signals.title.as_deref().unwrap_or(NO_TITLE);
    let description = signals
        .meta_description
        .as_deref()
        .unwrap_or(NO_META_DESCRIPTION);

    let mut rows = Vec::with_capacity(17);

    let title_length = title.chars().count();
    rows.push(ReportRow::check(
        "Title",
        title,
        title_length,
        Status::from_flag(params.title_length.accepts_count(title_length)),
    ));

    let description_length = description.chars().count();
    rows.push(ReportRow::check(
        "Meta Description",
        description,
        description_length,
        Status::from_flag(
            params
                .meta_description_length
                .accepts_count(description_length),
        ),
    ));

    let keyword_in_title = contains_keyword(title, keyword);
    rows.push(ReportRow::check(
        "Keyword in Title",
        keyword_in_title,
        CellValue::Empty,
        Status::from_flag(params.keyword_in_title.accepts_flag(keyword_in_title)),
    ));

    let keyword_in_description = contains_keyword(description, keyword);
    rows.push(ReportRow::check(
        "Keyword in Meta Description",
        keyword_in_description,
        CellValue::Empty,
        Status::from_flag(
            params
                .keyword_in_meta_description
                .accepts_flag(keyword_in_description),
        ),
    ));

    let h1 = signals.h1_count();
    rows.push(ReportRow::check(
        "H1",
        h1,
        CellValue::Empty,
        Status::from_flag(params.h1.accepts_count(h1)),
    ));

    let internal_links = signals
        .hrefs
        .iter()
        .filter(|href| is_internal(url, href))
        .count();
    rows.push(ReportRow::check(
        "Internal Links",
        internal_links,
        CellValue::Empty,
        Status::from_flag(params.internal_links.accepts_count(internal_links)),
    ));

    let content_length = signals.visible_text.chars().count();
    rows.push(ReportRow::check(
        "Content Length",
        content_length,
        CellValue::Empty,
        Status::from_flag(params.content_length.accepts_count(content_length)),
    ));

    rows.push(alt_text_row(signals, params));

    rows.push(ReportRow::check(
        "Broken Links",
        broken_links,
        CellValue::Empty,
        Status::from_flag(params.broken_links.accepts_count(broken_links)),
    ));

    rows.push(ReportRow::check(
        "Viewport Meta Tag",
        signals.has_viewport,
        CellValue::Empty,
        Status::from_flag(params.viewport_meta_tag.accepts_flag(signals.has_viewport)),
    ));

    let seconds = load_time.as_secs_f64();
    rows.push(ReportRow::check(
        "Page Load Time",
        format!("{:.2} seconds", seconds),
        CellValue::Empty,
        Status::from_flag(params.page_load_time.accepts(seconds)),
    ));

    // The next three rows repeat their status in the value column.
    let url_structure =
        Status::from_flag(params.url_structure.accepts_flag(has_path_separator(url)));
    rows.push(ReportRow::check(
        "URL Structure",
        url_structure,
        CellValue::Empty,
        url_structure,
    ));

    let mobile_friendly =
        Status::from_flag(params.mobile_friendly.accepts_flag(signals.has_viewport));
    rows.push(ReportRow::check(
        "Mobile Friendly",
        mobile_friendly,
        CellValue::Empty,
        mobile_friendly,
    ));

    let https = Status::from_flag(params.https.accepts_flag(is_https(url)));
    rows.push(ReportRow::check("HTTPS", https, CellValue::Empty, https));

    rows.push(ReportRow::check(
        "Structured Data",
        signals.has_structured_data,
        CellValue::Empty,
        Status::from_flag(
            params
                .structured_data
                .accepts_flag(signals.has_structured_data),
        ),
    ));

    // Freshness needs history across audits; it is always reported as not optimal.
    rows.push(ReportRow::check(
        "Content Freshness",
        Status::NotOptimal,
        CellValue::Empty,
        Status::NotOptimal,
    ));

    let density = keyword_density(&signals.visible_text, keyword);
    rows.push(ReportRow::check(
        "Keyword Density",
        format!("{:.2}%", density.percentage),
        density.occurrences,
        Status::from_flag(params.keyword_density.accepts(density.percentage)),
    ));

    rows
}

// A page without images has nothing to fix, so it passes.
fn alt_text_row(signals: &PageSignals, params: &OptimalParams) -> ReportRow {
    let optimal = if signals.images_total == 0 {
        true
    } else {
        let ratio = signals.images_with_alt as f64 / signals.images_total as f64;
        params.alt_text_ratio.accepts(ratio)
    };
    ReportRow::check(
        "Alt Text for Images",
        signals.images_with_alt,
        signals.images_total,
        Status::from_flag(optimal),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seo::Rule;

    const URL: &str = "https://example.com/";

    fn rows_for(signals: &PageSignals) -> Vec<ReportRow> {
        evaluate(
            signals,
            URL,
            Duration::from_millis(1100),
            0,
            &OptimalParams::default(),
        )
    }

    fn row<'a>(rows: &'a [ReportRow], parameter: &str) -> &'a ReportRow {
        rows.iter()
            .find(|row| row.parameter == parameter)
            .unwrap_or_else(|| panic!("missing row {parameter}"))
    }

    fn status_of(signals: &PageSignals, parameter: &str) -> String {
        row(&rows_for(signals), parameter).status.clone()
    }

    fn with_title(length: usize) -> PageSignals {
        PageSignals {
            title: Some("x".repeat(length)),
            ..PageSignals::default()
        }
    }

    fn with_description(length: usize) -> PageSignals {
        PageSignals {
            meta_description: Some("d".repeat(length)),
            ..PageSignals::default()
        }
    }

    fn with_images(total: usize, with_alt: usize) -> PageSignals {
        PageSignals {
            images_total: total,
            images_with_alt: with_alt,
            ..PageSignals::default()
        }
    }

    #[test]
    fn emits_seventeen_rows_in_fixed_order() {
        let parameters: Vec<String> = rows_for(&PageSignals::default())
            .into_iter()
            .map(|row| row.parameter)
            .collect();
        assert_eq!(
            parameters,
            vec![
                "Title",
                "Meta Description",
                "Keyword in Title",
                "Keyword in Meta Description",
                "H1",
                "Internal Links",
                "Content Length",
                "Alt Text for Images",
                "Broken Links",
                "Viewport Meta Tag",
                "Page Load Time",
                "URL Structure",
                "Mobile Friendly",
                "HTTPS",
                "Structured Data",
                "Content Freshness",
                "Keyword Density",
            ]
        );
    }

    #[test]
    fn title_length_boundaries() {
        assert_eq!(status_of(&with_title(49), "Title"), "Not Optimal");
        assert_eq!(status_of(&with_title(50), "Title"), "Optimal");
        assert_eq!(status_of(&with_title(60), "Title"), "Optimal");
        assert_eq!(status_of(&with_title(61), "Title"), "Not Optimal");
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let signals = PageSignals {
            title: Some("é".repeat(55)),
            ..PageSignals::default()
        };
        let rows = rows_for(&signals);
        assert_eq!(row(&rows, "Title").extra, CellValue::Int(55));
        assert_eq!(row(&rows, "Title").status, "Optimal");
    }

    #[test]
    fn meta_description_length_boundaries() {
        let field = "Meta Description";
        assert_eq!(status_of(&with_description(149), field), "Not Optimal");
        assert_eq!(status_of(&with_description(150), field), "Optimal");
        assert_eq!(status_of(&with_description(160), field), "Optimal");
        assert_eq!(status_of(&with_description(161), field), "Not Optimal");
    }

    #[test]
    fn missing_title_and_description_use_placeholders() {
        let rows = rows_for(&PageSignals::default());
        assert_eq!(row(&rows, "Title").value, CellValue::from(NO_TITLE));
        assert_eq!(row(&rows, "Title").extra, CellValue::Int(14));
        assert_eq!(
            row(&rows, "Meta Description").value,
            CellValue::from(NO_META_DESCRIPTION)
        );
        assert_eq!(row(&rows, "Keyword in Title").value, CellValue::Bool(false));
        assert_eq!(row(&rows, "Keyword in Title").status, "Not Optimal");
    }

    #[test]
    fn h1_must_appear_exactly_once() {
        for (count, expected) in [(0, "Not Optimal"), (1, "Optimal"), (2, "Not Optimal")] {
            let signals = PageSignals {
                heading_counts: [count, 3, 0, 0, 0, 0],
                ..PageSignals::default()
            };
            assert_eq!(status_of(&signals, "H1"), expected, "h1 count {count}");
        }
    }

    #[test]
    fn alt_text_ratio_threshold() {
        assert_eq!(status_of(&with_images(10, 9), "Alt Text for Images"), "Optimal");
        assert_eq!(status_of(&with_images(9, 8), "Alt Text for Images"), "Not Optimal");
        let rows = rows_for(&with_images(9, 8));
        assert_eq!(row(&rows, "Alt Text for Images").value, CellValue::Int(8));
        assert_eq!(row(&rows, "Alt Text for Images").extra, CellValue::Int(9));
    }

    #[test]
    fn page_without_images_passes_alt_text() {
        assert_eq!(status_of(&with_images(0, 0), "Alt Text for Images"), "Optimal");
    }

    #[test]
    fn internal_links_use_substring_match() {
        let mut hrefs: Vec<String> = (0..10).map(|i| format!("{URL}page/{i}")).collect();
        hrefs.push("/relative".to_string());
        let signals = PageSignals {
            hrefs,
            ..PageSignals::default()
        };
        let rows = rows_for(&signals);
        assert_eq!(row(&rows, "Internal Links").value, CellValue::Int(10));
        assert_eq!(row(&rows, "Internal Links").status, "Optimal");
    }

    #[test]
    fn https_and_url_structure() {
        let signals = PageSignals::default();
        let params = OptimalParams::default();
        let secure = evaluate(&signals, "https://example.com", Duration::ZERO, 0, &params);
        let plain = evaluate(&signals, "http://example.com", Duration::ZERO, 0, &params);
        assert_eq!(row(&secure, "HTTPS").status, "Optimal");
        assert_eq!(row(&secure, "HTTPS").value, CellValue::from("Optimal"));
        assert_eq!(row(&plain, "HTTPS").status, "Not Optimal");
        assert_eq!(row(&plain, "URL Structure").status, "Optimal");
    }

    #[test]
    fn broken_links_and_load_time() {
        let params = OptimalParams::default();
        let signals = PageSignals::default();
        let slow = evaluate(&signals, URL, Duration::from_millis(2500), 1, &params);
        assert_eq!(row(&slow, "Broken Links").status, "Not Optimal");
        assert_eq!(row(&slow, "Page Load Time").value, CellValue::from("2.50 seconds"));
        assert_eq!(row(&slow, "Page Load Time").status, "Not Optimal");

        let fast = evaluate(&signals, URL, Duration::from_secs(2), 0, &params);
        assert_eq!(row(&fast, "Broken Links").status, "Optimal");
        assert_eq!(row(&fast, "Page Load Time").status, "Optimal");
    }

    #[test]
    fn content_freshness_is_never_optimal() {
        let rows = rows_for(&PageSignals::default());
        let freshness = row(&rows, "Content Freshness");
        assert_eq!(freshness.value, CellValue::from("Not Optimal"));
        assert_eq!(freshness.status, "Not Optimal");
    }

    #[test]
    fn keyword_density_row() {
        let signals = PageSignals {
            visible_text: format!("SEO {}", "word ".repeat(49)),
            ..PageSignals::default()
        };
        let rows = rows_for(&signals);
        let density = row(&rows, "Keyword Density");
        assert_eq!(density.value, CellValue::from("2.00%"));
        assert_eq!(density.extra, CellValue::Int(1));
        assert_eq!(density.status, "Optimal");
    }

    #[test]
    fn overridden_thresholds_are_honoured() {
        let params = OptimalParams {
            title_length: Rule::Range { min: 1.0, max: 30.0 },
            ..OptimalParams::default()
        };
        let rows = evaluate(&with_title(25), URL, Duration::ZERO, 0, &params);
        assert_eq!(row(&rows, "Title").status, "Optimal");
    }

    #[test]
    fn minimal_seo_guide_page() {
        let mut hrefs: Vec<String> = (0..5).map(|i| format!("{URL}guide/{i}")).collect();
        hrefs.push("https://elsewhere.example/".to_string());
        let signals = PageSignals {
            title: Some("SEO Best Practices Guide".to_string()),
            heading_counts: [1, 0, 0, 0, 0, 0],
            hrefs,
            visible_text: "word ".repeat(200),
            has_viewport: true,
            ..PageSignals::default()
        };
        let rows = rows_for(&signals);
        let status = |parameter: &str| row(&rows, parameter).status.clone();

        assert_eq!(row(&rows, "Title").extra, CellValue::Int(24));
        assert_eq!(status("Title"), "Not Optimal");
        assert_eq!(status("Meta Description"), "Not Optimal");
        assert_eq!(status("Keyword in Title"), "Optimal");
        assert_eq!(status("H1"), "Optimal");
        assert_eq!(row(&rows, "Internal Links").value, CellValue::Int(5));
        assert_eq!(status("Internal Links"), "Not Optimal");
        assert_eq!(row(&rows, "Content Length").value, CellValue::Int(1000));
        assert_eq!(status("Content Length"), "Optimal");
        assert_eq!(status("Viewport Meta Tag"), "Optimal");
        assert_eq!(status("Mobile Friendly"), "Optimal");
        assert_eq!(row(&rows, "Page Load Time").value, CellValue::from("1.10 seconds"));
        assert_eq!(status("Page Load Time"), "Optimal");
        assert_eq!(status("HTTPS"), "Optimal");
    }
}
