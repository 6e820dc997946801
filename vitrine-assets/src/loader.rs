//! Background asset loading
//!
//! One worker thread decodes product models off the UI thread. Every request
//! and result carries the render-session generation that asked for it, so
//! the viewer can discard results that arrive after the session they belong
//! to was torn down.

use std::path::PathBuf;
use std::thread;

use vitrine_core::{Error, Model, Result};

struct LoadRequest {
    generation: u64,
    path: PathBuf,
}

/// Outcome of one decode request
#[derive(Debug)]
pub struct LoadResult {
    /// Generation of the session that requested the decode
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<Model>,
}

/// Handle to the loader worker thread
///
/// Dropping the loader closes the request channel, which ends the worker.
pub struct AssetLoader {
    requests: Option<flume::Sender<LoadRequest>>,
    results: flume::Receiver<LoadResult>,
    worker: Option<thread::JoinHandle<()>>,
}

impl AssetLoader {
    pub fn new() -> Result<Self> {
        let (request_tx, request_rx) = flume::unbounded::<LoadRequest>();
        let (result_tx, result_rx) = flume::unbounded();

        let worker = thread::Builder::new()
            .name("vitrine-asset-loader".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    log::info!(
                        "loading {:?} for session generation {}",
                        request.path,
                        request.generation
                    );
                    let result = crate::load_model(&request.path);
                    match &result {
                        Ok(model) => log::info!(
                            "loaded {:?}: {} vertices, {} triangles",
                            request.path,
                            model.vertex_count(),
                            model.triangle_count()
                        ),
                        Err(err) => log::error!("failed to load {:?}: {err}", request.path),
                    }
                    let delivered = result_tx.send(LoadResult {
                        generation: request.generation,
                        path: request.path,
                        result,
                    });
                    if delivered.is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| Error::Asset(format!("failed to spawn loader worker: {e}")))?;

        Ok(Self {
            requests: Some(request_tx),
            results: result_rx,
            worker: Some(worker),
        })
    }

    /// Queue a decode for `path` on behalf of session `generation`.
    pub fn request(&self, generation: u64, path: PathBuf) {
        // The worker outlives the sender; a send only fails during shutdown.
        if let Some(requests) = &self.requests {
            let _ = requests.send(LoadRequest { generation, path });
        }
    }

    /// Drain finished loads without blocking.
    pub fn poll(&self) -> Vec<LoadResult> {
        self.results.try_iter().collect()
    }
}

impl Drop for AssetLoader {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_asset_delivers_error_with_generation() {
        let loader = AssetLoader::new().unwrap();
        loader.request(7, PathBuf::from("no-such-model.gltf"));

        let result = loader
            .results
            .recv_timeout(Duration::from_secs(10))
            .expect("worker should deliver a result");
        assert_eq!(result.generation, 7);
        assert!(result.result.is_err());
    }

    #[test]
    fn requests_are_answered_in_order() {
        let loader = AssetLoader::new().unwrap();
        loader.request(1, PathBuf::from("a.gltf"));
        loader.request(2, PathBuf::from("b.gltf"));

        let first = loader.results.recv_timeout(Duration::from_secs(10)).unwrap();
        let second = loader.results.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
    }

    #[test]
    fn dropping_the_loader_stops_the_worker() {
        let loader = AssetLoader::new().unwrap();
        loader.request(1, PathBuf::from("a.gltf"));
        drop(loader);
    }
}
