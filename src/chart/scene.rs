use std::collections::HashMap;

use super::layout::{BarGeometry, LabelGeometry};
use super::reconcile::Reconciliation;
use super::transition::Tween;

// ---------------------------------------------------------------------------
// Mark – one country's retained bars + label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Mark {
    pub value_a: f64,
    pub value_b: f64,
    bar_a: Tween<BarGeometry>,
    bar_b: Tween<BarGeometry>,
    label: Tween<LabelGeometry>,
}

/// Where a mark should end up after the current render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkTarget {
    pub value_a: f64,
    pub value_b: f64,
    pub bar_a: BarGeometry,
    pub bar_b: BarGeometry,
    pub label: LabelGeometry,
    /// Start geometry for bars that are entering.
    pub enter_a: BarGeometry,
    pub enter_b: BarGeometry,
}

/// Geometry of one mark sampled at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkFrame<'a> {
    pub country: &'a str,
    pub value_a: f64,
    pub value_b: f64,
    pub bar_a: BarGeometry,
    pub bar_b: BarGeometry,
    pub label: LabelGeometry,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Retained marks keyed by country, plus their current display order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    marks: HashMap<String, Mark>,
    order: Vec<String>,
}

impl Scene {
    /// Keys currently on screen, in display order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Apply a reconciliation. `targets` must hold an entry for every entered
    /// and retained key; `order` becomes the new display order.
    pub fn apply(
        &mut self,
        diff: &Reconciliation<String>,
        targets: &HashMap<String, MarkTarget>,
        order: Vec<String>,
        now: f64,
        duration: f64,
    ) {
        for key in &diff.removed {
            self.marks.remove(key);
        }

        for key in &diff.entered {
            let Some(t) = targets.get(key) else {
                continue;
            };
            let mark = Mark {
                value_a: t.value_a,
                value_b: t.value_b,
                bar_a: Tween::new(t.enter_a, t.bar_a, now, duration),
                bar_b: Tween::new(t.enter_b, t.bar_b, now, duration),
                label: Tween::settled(t.label),
            };
            self.marks.insert(key.clone(), mark);
        }

        for key in &diff.retained {
            let (Some(mark), Some(t)) = (self.marks.get_mut(key), targets.get(key)) else {
                continue;
            };
            mark.value_a = t.value_a;
            mark.value_b = t.value_b;
            mark.bar_a.retarget(t.bar_a, now, duration);
            mark.bar_b.retarget(t.bar_b, now, duration);
            mark.label.retarget(t.label, now, duration);
        }

        self.order = order;
    }

    /// Every mark sampled at `now`, in display order.
    pub fn frame(&self, now: f64) -> Vec<MarkFrame<'_>> {
        self.iter()
            .map(|(country, m)| MarkFrame {
                country,
                value_a: m.value_a,
                value_b: m.value_b,
                bar_a: m.bar_a.sample(now),
                bar_b: m.bar_b.sample(now),
                label: m.label.sample(now),
            })
            .collect()
    }

    /// Every mark at its final geometry, in display order.
    pub fn targets(&self) -> Vec<MarkFrame<'_>> {
        self.iter()
            .map(|(country, m)| MarkFrame {
                country,
                value_a: m.value_a,
                value_b: m.value_b,
                bar_a: *m.bar_a.target(),
                bar_b: *m.bar_b.target(),
                label: *m.label.target(),
            })
            .collect()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.marks.values().any(|m| {
            !(m.bar_a.is_finished(now) && m.bar_b.is_finished(now) && m.label.is_finished(now))
        })
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Mark)> {
        self.order
            .iter()
            .filter_map(|k| self.marks.get(k).map(|m| (k.as_str(), m)))
    }
}
