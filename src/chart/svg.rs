//! SVG export: writes the settled chart as a standalone SVG document.

use super::scale::percent_label;
use super::ChartRenderer;
use crate::color::{to_hex, SeriesColors};

/// Text and tick settings that are not part of the layout.
#[derive(Debug, Clone)]
pub struct SvgOptions<'a> {
    pub title: &'a str,
    pub axis_ticks: usize,
    pub colors: SeriesColors,
}

/// Render the chart at its settled geometry.
pub fn render_svg(chart: &ChartRenderer, opts: &SvgOptions<'_>) -> String {
    let layout = chart.layout();
    let (width, height) = (layout.canvas_width, layout.canvas_height);
    let ink = to_hex(opts.colors.ink);
    let fill_a = to_hex(opts.colors.bar_a);
    let fill_b = to_hex(opts.colors.bar_b);
    let marks = chart.targets();

    let mut svg = String::with_capacity(1024 + marks.len() * 400);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:sans-serif;font-size:10px">"#,
    ));
    svg.push_str(&format!(
        r#"<text class="title" x="100" y="30" text-anchor="middle" style="font-size:16px" fill="{ink}">{}</text>"#,
        escape_xml(opts.title),
    ));
    svg.push_str(&format!(
        r#"<g transform="translate({},{})">"#,
        layout.padding.left, layout.padding.top,
    ));

    // Value axis along the baseline.
    let baseline = layout.baseline();
    svg.push_str(&format!(
        r#"<g class="x-axis" transform="translate(0,{baseline})"><line x1="0" y1="0" x2="{}" y2="0" stroke="{ink}"/>"#,
        layout.chart_width,
    ));
    for tick in chart.scale().ticks(opts.axis_ticks) {
        let x = chart.scale().apply(tick);
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="0" x2="{x}" y2="6" stroke="{ink}"/><text x="{x}" y="9" dy="0.71em" text-anchor="middle" fill="{ink}">{}</text>"#,
            percent_label(tick),
        ));
    }
    svg.push_str("</g>");

    for mark in &marks {
        for (class, bar, fill, value) in [
            ("bar-a", mark.bar_a, &fill_a, mark.value_a),
            ("bar-b", mark.bar_b, &fill_b, mark.value_b),
        ] {
            svg.push_str(&format!(
                r#"<rect class="{class}" x="{}" y="{}" width="{}" height="{}" fill="{fill}"><title>{}: {}</title></rect>"#,
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                escape_xml(mark.country),
                percent_label(value),
            ));
        }
        svg.push_str(&format!(
            r#"<text class="label" x="{}" y="{}" text-anchor="middle" fill="{ink}">{}</text>"#,
            mark.label.x,
            mark.label.y,
            escape_xml(mark.country),
        ));
    }

    svg.push_str("</g></svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::{Layout, Padding};
    use crate::data::filter::FilterKey;
    use crate::data::model::{Dataset, Record};

    fn chart() -> ChartRenderer {
        let ds = Dataset::from_records(vec![
            Record::new("Bosnia & Herzegovina", "Europe", 10.0, 20.0),
            Record::new("Peru", "South America", 5.0, 5.0),
        ])
        .unwrap();
        let layout = Layout::new(1000.0, 960.0, Padding::default(), 20, 15.0);
        ChartRenderer::new(ds, layout, 0.5)
    }

    fn opts() -> SvgOptions<'static> {
        SvgOptions {
            title: "Housing Burden (%)",
            axis_ticks: 10,
            colors: SeriesColors::default(),
        }
    }

    #[test]
    fn basic_svg_output() {
        let mut c = chart();
        c.render(FilterKey::All, 0.0, 0.0);
        let svg = render_svg(&c, &opts());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Housing Burden (%)"));
        assert_eq!(svg.matches(r#"class="bar-a""#).count(), 2);
        assert_eq!(svg.matches(r#"class="label""#).count(), 2);
        assert!(svg.contains(">20%</text>"));
        assert!(svg.contains("#800080"));
        assert!(svg.contains("#00008b"));
    }

    #[test]
    fn exports_only_visible_marks() {
        let mut c = chart();
        c.render(FilterKey::All, 6.0, 0.0);
        let svg = render_svg(&c, &opts());
        assert!(!svg.contains("Peru"));
        assert_eq!(svg.matches(r#"class="bar-b""#).count(), 1);
    }

    #[test]
    fn every_element_is_written_and_closed() {
        let mut c = chart();
        c.render(FilterKey::All, 0.0, 0.0);
        let svg = render_svg(&c, &opts());
        let ticks = c.scale().ticks(10).len();
        assert_eq!(svg.matches("<g").count(), 3);
        assert_eq!(svg.matches("</g>").count(), 3);
        assert_eq!(svg.matches("<text").count(), 1 + ticks + 2);
        assert_eq!(svg.matches("</text>").count(), 1 + ticks + 2);
        assert_eq!(svg.matches("<rect").count(), 4);
        assert_eq!(svg.matches("</rect>").count(), 4);
    }

    #[test]
    fn escapes_xml_entities() {
        let mut c = chart();
        c.render(FilterKey::All, 0.0, 0.0);
        let svg = render_svg(&c, &opts());
        assert!(svg.contains("Bosnia &amp; Herzegovina"));
    }
}
