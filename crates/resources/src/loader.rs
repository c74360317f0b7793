//! Background scene loading.
//!
//! The room is imported on a worker thread. The owner polls once per frame;
//! the first poll that sees the result moves the loader out of
//! [`LoadState::Pending`] and reports the transition exactly once.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use roomview_scene::SceneGraph;

use crate::{ResourceError, ResourceResult, import_gltf};

/// Where a load currently stands.
#[derive(Debug)]
pub enum LoadState {
    Pending,
    Loaded(SceneGraph),
    Failed(ResourceError),
}

/// The one-shot transition out of [`LoadState::Pending`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded,
    Failed,
}

/// Loads a scene graph off the event-loop thread.
pub struct SceneLoader {
    path: PathBuf,
    state: LoadState,
    receiver: Option<Receiver<ResourceResult<SceneGraph>>>,
}

impl SceneLoader {
    /// Start importing the glTF file at `path` on a worker thread.
    pub fn spawn(path: impl Into<PathBuf>) -> ResourceResult<Self> {
        let path = path.into();
        let worker_path = path.clone();
        Self::spawn_with(path, move || import_gltf(&worker_path))
    }

    /// Start a load driven by an arbitrary import function.
    pub fn spawn_with<F>(path: impl Into<PathBuf>, load: F) -> ResourceResult<Self>
    where
        F: FnOnce() -> ResourceResult<SceneGraph> + Send + 'static,
    {
        let path = path.into();
        let (sender, receiver) = mpsc::channel();

        thread::Builder::new()
            .name("scene-loader".into())
            .spawn(move || {
                // The receiver may already be gone if the viewer shut down.
                let _ = sender.send(load());
            })?;

        tracing::info!("Loading scene from {}", path.display());
        Ok(Self {
            path,
            state: LoadState::Pending,
            receiver: Some(receiver),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    /// The loaded graph, once available.
    pub fn graph(&self) -> Option<&SceneGraph> {
        match &self.state {
            LoadState::Loaded(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn graph_mut(&mut self) -> Option<&mut SceneGraph> {
        match &mut self.state {
            LoadState::Loaded(graph) => Some(graph),
            _ => None,
        }
    }

    /// The load error, if the load failed.
    pub fn error(&self) -> Option<&ResourceError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Check for a result without blocking.
    ///
    /// Returns `Some` only on the poll that leaves `Pending`.
    pub fn poll(&mut self) -> Option<LoadEvent> {
        let receiver = self.receiver.as_ref()?;
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(ResourceError::LoaderDisconnected(self.path.clone()))
            }
        };
        Some(self.finish(result))
    }

    /// Block until the load completes. Returns `None` if it already has.
    pub fn wait(&mut self) -> Option<LoadEvent> {
        let receiver = self.receiver.as_ref()?;
        let result = receiver
            .recv()
            .unwrap_or_else(|_| Err(ResourceError::LoaderDisconnected(self.path.clone())));
        Some(self.finish(result))
    }

    fn finish(&mut self, result: ResourceResult<SceneGraph>) -> LoadEvent {
        self.receiver = None;
        match result {
            Ok(graph) => {
                tracing::info!("Scene loaded: {} ({} nodes)", self.path.display(), graph.len());
                self.state = LoadState::Loaded(graph);
                LoadEvent::Loaded
            }
            Err(err) => {
                tracing::error!("Scene load failed: {}", err);
                self.state = LoadState::Failed(err);
                LoadEvent::Failed
            }
        }
    }
}
