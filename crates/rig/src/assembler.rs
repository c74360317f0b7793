//! Rig assembly: resolve a catalog of anchors and build a fixture at each.
//!
//! Assembly is best effort. A missing anchor is logged and recorded in the
//! report, and the remaining names are still processed. Names are visited
//! in catalog order, never graph order, so diagnostics are reproducible
//! across differently ordered assets.

use std::collections::HashMap;

use roomview_core::{FixtureConfig, RigSettings};
use roomview_scene::{NodeId, SceneGraph};

use crate::anchor::{Anchor, resolve};
use crate::catalog::{SPOT_ANCHORS, STRIP_ANCHORS, default_strip_configs};
use crate::fixture::{Fixture, FixtureClass, synthesize};

/// Outcome of assembling one fixture class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RigReport {
    pub class: FixtureClass,
    /// Number of fixtures built
    pub created: usize,
    /// Catalog names with no matching node, in catalog order
    pub missing: Vec<String>,
    /// Names built from the default config because none was given
    pub defaulted: Vec<String>,
    pub fixtures: Vec<Fixture>,
}

impl RigReport {
    fn new(class: FixtureClass) -> Self {
        Self {
            class,
            created: 0,
            missing: Vec::new(),
            defaulted: Vec::new(),
            fixtures: Vec::new(),
        }
    }

    /// Names requested, whether found or not.
    pub fn requested(&self) -> usize {
        self.created + self.missing.len()
    }

    fn log_summary(&self) {
        if self.missing.is_empty() {
            tracing::info!("Created {} {} fixture(s)", self.created, self.class);
        } else {
            tracing::info!(
                "Created {} of {} {} fixture(s), missing: {}",
                self.created,
                self.requested(),
                self.class,
                self.missing.join(", ")
            );
        }
    }
}

fn assemble<S, F>(
    graph: &mut SceneGraph,
    root: NodeId,
    class: FixtureClass,
    names: &[S],
    mut build: F,
) -> RigReport
where
    S: AsRef<str>,
    F: FnMut(&mut SceneGraph, NodeId, &str, &mut RigReport) -> Fixture,
{
    let mut report = RigReport::new(class);
    for name in names {
        let name = name.as_ref();
        match resolve(graph, root, name) {
            Anchor::Found(anchor) => {
                let fixture = build(&mut *graph, anchor, name, &mut report);
                tracing::debug!("{} fixture attached to '{}'", class, name);
                report.fixtures.push(fixture);
                report.created += 1;
            }
            Anchor::NotFound => {
                tracing::warn!("Anchor not found: {}", name);
                report.missing.push(name.to_string());
            }
        }
    }
    report.log_summary();
    report
}

/// Attach a spot fixture at every catalog name found under `root`.
pub fn assemble_spots<S: AsRef<str>>(
    graph: &mut SceneGraph,
    root: NodeId,
    names: &[S],
) -> RigReport {
    let config = FixtureConfig::default();
    assemble(graph, root, FixtureClass::Spot, names, |graph, anchor, _, _| {
        synthesize(graph, anchor, FixtureClass::Spot, &config)
    })
}

/// Attach an LED strip at every catalog name found under `root`.
///
/// Configs are looked up by anchor name. A found anchor without a config
/// is built from [`FixtureConfig::default`] and listed in
/// [`RigReport::defaulted`].
pub fn assemble_strips<S: AsRef<str>>(
    graph: &mut SceneGraph,
    root: NodeId,
    names: &[S],
    configs: &HashMap<String, FixtureConfig>,
) -> RigReport {
    let fallback = FixtureConfig::default();
    assemble(
        graph,
        root,
        FixtureClass::LedStrip,
        names,
        |graph, anchor, name, report| {
            let config = configs.get(name).unwrap_or_else(|| {
                tracing::warn!("No config for LED strip '{}', using defaults", name);
                report.defaulted.push(name.to_string());
                &fallback
            });
            let fixture = synthesize(graph, anchor, FixtureClass::LedStrip, config);
            let p = graph.world_position(anchor);
            tracing::info!(
                "LED strip created: {} | position: ({:.2}, {:.2}, {:.2})",
                name,
                p.x,
                p.y,
                p.z
            );
            fixture
        },
    )
}

/// Reports for a full rig.
#[derive(Clone, Debug)]
pub struct RigSummary {
    pub spots: RigReport,
    pub strips: RigReport,
}

impl RigSummary {
    pub fn created(&self) -> usize {
        self.spots.created + self.strips.created
    }
}

/// Catalogs and strip configs for a whole room.
#[derive(Clone, Debug)]
pub struct RigAssembler {
    pub spot_anchors: Vec<String>,
    pub strip_anchors: Vec<String>,
    pub strip_configs: HashMap<String, FixtureConfig>,
}

impl Default for RigAssembler {
    fn default() -> Self {
        Self {
            spot_anchors: SPOT_ANCHORS.iter().map(|s| s.to_string()).collect(),
            strip_anchors: STRIP_ANCHORS.iter().map(|s| s.to_string()).collect(),
            strip_configs: default_strip_configs(),
        }
    }
}

impl RigAssembler {
    /// Built-in catalogs with configured overrides applied.
    pub fn from_settings(settings: &RigSettings) -> Self {
        let mut rig = Self::default();
        if let Some(spots) = &settings.spot_anchors {
            rig.spot_anchors = spots.clone();
        }
        if let Some(strips) = &settings.strip_anchors {
            rig.strip_anchors = strips.clone();
        }
        rig.strip_configs.extend(
            settings
                .strips
                .iter()
                .map(|(name, config)| (name.clone(), config.clone())),
        );
        rig
    }

    /// Strip anchors that will fall back to the default config.
    pub fn unconfigured_strips(&self) -> Vec<&str> {
        self.strip_anchors
            .iter()
            .filter(|name| !self.strip_configs.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Strip configs whose name is not in the strip catalog.
    pub fn orphan_configs(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .strip_configs
            .keys()
            .filter(|name| !self.strip_anchors.contains(*name))
            .map(String::as_str)
            .collect();
        orphans.sort_unstable();
        orphans
    }

    /// Log catalog/config mismatches before assembly.
    pub fn validate(&self) {
        for name in self.unconfigured_strips() {
            tracing::warn!("LED strip '{}' has no explicit config", name);
        }
        for name in self.orphan_configs() {
            tracing::warn!("Config for '{}' matches no LED strip anchor", name);
        }
    }

    /// Build spots and strips under `root`.
    ///
    /// Only anchor children are added; `root` itself gains no nodes.
    pub fn assemble(&self, graph: &mut SceneGraph, root: NodeId) -> RigSummary {
        self.validate();
        let spots = assemble_spots(graph, root, self.spot_anchors.as_slice());
        let strips = assemble_strips(
            graph,
            root,
            self.strip_anchors.as_slice(),
            &self.strip_configs,
        );
        RigSummary { spots, strips }
    }
}
