/// Chart layer: fixed scale, band layout, keyed reconciliation and the
/// retained scene of animated marks.
///
/// ```text
///   Dataset ──► LinearScale (fixed at load)
///      │
///      ▼  render(filter, cutoff, now)
///   visible subset ──► targets per country
///      │
///      ▼
///   reconcile(old keys, new keys) ──► entered / retained / removed
///      │
///      ▼
///   Scene::apply ──► tweens sampled each frame by the UI / SVG export
/// ```

pub mod layout;
pub mod reconcile;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod transition;

use std::collections::HashMap;

use crate::data::filter::{visible_indices, FilterKey, ViewState};
use crate::data::model::Dataset;

use layout::Layout;
use reconcile::{reconcile, Reconciliation};
use scale::LinearScale;
use scene::{MarkFrame, MarkTarget, Scene};

// ---------------------------------------------------------------------------
// Chart renderer
// ---------------------------------------------------------------------------

/// Owns the dataset, the scale fixed from it, and the marks on screen.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    dataset: Dataset,
    scale: LinearScale,
    layout: Layout,
    duration: f64,
    view: ViewState,
    scene: Scene,
}

impl ChartRenderer {
    /// Fix the scale from the full dataset. Nothing is visible until the
    /// first [`render`](Self::render).
    pub fn new(dataset: Dataset, layout: Layout, duration: f64) -> Self {
        let scale = LinearScale::from_max(dataset.max_value(), layout.chart_width);
        log::debug!(
            "Scale domain {:?} → range {:?}",
            scale.domain(),
            scale.range()
        );
        Self {
            dataset,
            scale,
            layout,
            duration,
            view: ViewState::default(),
            scene: Scene::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Show the records matching `filter` whose two values both reach
    /// `cutoff`, animating from the current scene.
    pub fn render(&mut self, filter: FilterKey, cutoff: f64, now: f64) -> Reconciliation<String> {
        let indices = visible_indices(&self.dataset, &filter, cutoff);

        let mut order = Vec::with_capacity(indices.len());
        let mut targets = HashMap::with_capacity(indices.len());
        for (slot, &idx) in indices.iter().enumerate() {
            let rec = &self.dataset.records[idx];
            let (xa, xb) = (self.layout.bar_a_x(slot), self.layout.bar_b_x(slot));
            let target = MarkTarget {
                value_a: rec.value_a,
                value_b: rec.value_b,
                bar_a: self.layout.bar(xa, self.scale.apply(rec.value_a)),
                bar_b: self.layout.bar(xb, self.scale.apply(rec.value_b)),
                label: self.layout.label(slot),
                enter_a: self.layout.collapsed_bar(xa),
                enter_b: self.layout.collapsed_bar(xb),
            };
            order.push(rec.country.clone());
            targets.insert(rec.country.clone(), target);
        }

        let diff = reconcile(self.scene.keys(), &order);
        self.scene.apply(&diff, &targets, order, now, self.duration);

        if diff.is_noop() {
            log::debug!("render({filter}, {cutoff}): {} marks retargeted", diff.retained.len());
        } else {
            log::debug!(
                "render({filter}, {cutoff}): {} entered, {} retained, {} removed",
                diff.entered.len(),
                diff.retained.len(),
                diff.removed.len()
            );
        }
        self.view = ViewState { filter, cutoff };
        diff
    }

    /// Marks sampled at `now`.
    pub fn frame(&self, now: f64) -> Vec<MarkFrame<'_>> {
        self.scene.frame(now)
    }

    /// Marks at their settled geometry.
    pub fn targets(&self) -> Vec<MarkFrame<'_>> {
        self.scene.targets()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.scene.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::layout::Padding;
    use super::*;
    use crate::data::model::Record;

    const D: f64 = 0.5;

    /// Chart area 400 × 200 with no padding: band 10, bar width 2.5.
    fn layout() -> Layout {
        let padding = Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        };
        Layout::new(400.0, 200.0, padding, 20, 15.0)
    }

    fn renderer() -> ChartRenderer {
        let ds = Dataset::from_records(vec![
            Record::new("A", "X", 10.0, 20.0),
            Record::new("B", "Y", 5.0, 5.0),
        ])
        .unwrap();
        ChartRenderer::new(ds, layout(), D)
    }

    fn countries(frames: &[MarkFrame<'_>]) -> Vec<String> {
        frames.iter().map(|f| f.country.to_string()).collect()
    }

    #[test]
    fn all_at_zero_shows_both_groups_scaled_to_max() {
        let mut r = renderer();
        let diff = r.render(FilterKey::All, 0.0, 0.0);
        assert_eq!(diff.entered, vec!["A", "B"]);
        assert_eq!(r.scale().domain(), (0.0, 20.0));

        let settled = r.targets();
        assert_eq!(countries(&settled), vec!["A", "B"]);
        // 400 px per 20 units
        assert_eq!(settled[0].bar_a.height, 200.0);
        assert_eq!(settled[0].bar_b.height, 400.0);
        assert_eq!(settled[1].bar_a.height, 100.0);
        assert_eq!(settled[1].bar_b.height, 100.0);
        assert_eq!(settled[1].bar_a.x, 10.0);
        assert_eq!(settled[1].label.x, 15.0);
    }

    #[test]
    fn continent_filter_shows_only_that_continent() {
        let mut r = renderer();
        r.render(FilterKey::Continent("X".into()), 0.0, 0.0);
        assert_eq!(countries(&r.targets()), vec!["A"]);
    }

    #[test]
    fn cutoff_hides_records_below_it() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        let diff = r.render(FilterKey::All, 6.0, 1.0);
        assert_eq!(diff.removed, vec!["B"]);
        assert_eq!(countries(&r.targets()), vec!["A"]);
        assert_eq!(r.view().cutoff, 6.0);
    }

    #[test]
    fn scale_domain_survives_filtering() {
        let mut r = renderer();
        let before = *r.scale();
        r.render(FilterKey::Continent("Y".into()), 0.0, 0.0);
        r.render(FilterKey::All, 15.0, 1.0);
        assert_eq!(*r.scale(), before);
        // B alone keeps its bar lengths relative to max 20
        r.render(FilterKey::Continent("Y".into()), 0.0, 2.0);
        assert_eq!(r.targets()[0].bar_a.height, 100.0);
    }

    #[test]
    fn render_is_idempotent() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        let first: Vec<_> = r.targets().into_iter().map(|f| (f.bar_a, f.bar_b, f.label)).collect();
        let diff = r.render(FilterKey::All, 0.0, 0.1);
        assert!(diff.is_noop());
        let second: Vec<_> = r.targets().into_iter().map(|f| (f.bar_a, f.bar_b, f.label)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn entering_bars_grow_from_the_baseline() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        let start = r.frame(0.0);
        assert_eq!(start[0].bar_a.height, 0.0);
        assert_eq!(start[0].bar_a.y, 200.0);
        assert!(r.is_animating(0.25));

        let end = r.frame(D);
        assert_eq!(end[0].bar_a.height, 200.0);
        assert_eq!(end[0].bar_a.y, 0.0);
        assert!(!r.is_animating(D));
    }

    #[test]
    fn retained_mark_slides_to_its_new_slot() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        // B moves from slot 1 to slot 0
        r.render(FilterKey::Continent("Y".into()), 0.0, 1.0);
        let start = r.frame(1.0);
        assert_eq!(start[0].bar_a.x, 10.0);
        let mid = r.frame(1.25);
        assert_eq!(mid[0].bar_a.x, 5.0);
        assert_eq!(r.frame(1.5)[0].bar_a.x, 0.0);
    }

    #[test]
    fn rerender_mid_transition_retargets_from_current_geometry() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        // halfway up: A's first bar is 100 px tall
        r.render(FilterKey::All, 0.0, 0.25);
        let frame = r.frame(0.25);
        assert_eq!(frame[0].bar_a.height, 100.0);
        assert_eq!(r.frame(0.75)[0].bar_a.height, 200.0);
    }

    #[test]
    fn unknown_continent_clears_the_chart() {
        let mut r = renderer();
        r.render(FilterKey::All, 0.0, 0.0);
        let diff = r.render(FilterKey::parse("Atlantis"), 0.0, 1.0);
        assert_eq!(diff.removed, vec!["A", "B"]);
        assert!(r.scene().is_empty());
        assert!(r.frame(1.0).is_empty());
    }
}
