//! Everything the viewer session owns, passed explicitly instead of shared
//! through globals.

use roomview_core::ViewerConfig;
use roomview_platform::PointerEvent;
use roomview_resources::{LoadEvent, ResourceResult, SceneLoader, center_vertically};
use roomview_rig::{BaseLights, RigAssembler, RigSummary, base_lighting};
use roomview_scene::{Camera, NodeId, OrbitController, SceneGraph};

pub struct ViewerContext {
    pub camera: Camera,
    /// Fixed scene root holding the base lights; the controller never moves it
    stage: SceneGraph,
    base_lights: Option<BaseLights>,
    pub controller: OrbitController,
    loader: SceneLoader,
    rig: RigAssembler,
    rig_summary: Option<RigSummary>,
}

impl ViewerContext {
    /// Set up the session and start loading the room in the background.
    pub fn new(config: &ViewerConfig, aspect: f32) -> ResourceResult<Self> {
        let loader = SceneLoader::spawn(config.model_path.clone())?;
        Ok(Self::with_loader(config, aspect, loader))
    }

    /// Base lighting is attached to the stage here, before the room arrives.
    pub fn with_loader(config: &ViewerConfig, aspect: f32, loader: SceneLoader) -> Self {
        let mut stage = SceneGraph::new("scene");
        let base_lights = if config.rig.disable_base_lighting {
            tracing::debug!("Base lighting disabled");
            None
        } else {
            let root = stage.root();
            Some(base_lighting(&mut stage, root))
        };
        Self {
            camera: Camera::from_settings(&config.camera, aspect),
            stage,
            base_lights,
            controller: OrbitController::new(&config.controller),
            loader,
            rig: RigAssembler::from_settings(&config.rig),
            rig_summary: None,
        }
    }

    pub fn stage(&self) -> &SceneGraph {
        &self.stage
    }

    pub fn base_lights(&self) -> Option<BaseLights> {
        self.base_lights
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.loader.graph()
    }

    /// The loaded room's root node.
    pub fn room(&self) -> Option<NodeId> {
        self.scene().map(SceneGraph::root)
    }

    pub fn rig_summary(&self) -> Option<&RigSummary> {
        self.rig_summary.as_ref()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controller.handle(event);
    }

    /// React to the load finishing. Returns the transition, if one happened.
    ///
    /// On `Loaded` the room is centered and the rig assembled exactly once.
    pub fn poll_load(&mut self) -> Option<LoadEvent> {
        let event = self.loader.poll()?;
        if event == LoadEvent::Loaded {
            self.on_loaded();
        } else {
            tracing::warn!("Room failed to load, continuing without a light rig");
        }
        Some(event)
    }

    fn on_loaded(&mut self) {
        let Some(graph) = self.loader.graph_mut() else {
            return;
        };
        let root = graph.root();
        center_vertically(graph, root);
        let summary = self.rig.assemble(graph, root);
        tracing::info!(
            "Rig ready: {} spot(s), {} LED strip(s)",
            summary.spots.created,
            summary.strips.created
        );
        self.rig_summary = Some(summary);
    }

    /// Per-frame hook: advance the controller and push its state into the
    /// room and camera.
    pub fn frame(&mut self, dt: f32) {
        self.controller.update(dt);
        let Some(graph) = self.loader.graph_mut() else {
            return;
        };
        let root = graph.root();
        if let Some(room) = graph.get_mut(root) {
            self.controller.apply(&mut room.transform, &mut self.camera);
        }
    }
}
