use crossbeam_channel::{Receiver, Sender, unbounded};
use cubix_chunk::SplitMesh;
use cubix_world::ChunkCoord;
use hashbrown::HashMap;

/// Consumer of built split meshes. Implementations keep their own GPU-side handles keyed
/// by chunk and split.
pub trait RenderBackend {
    /// Takes ownership of the split's buffers, replacing whatever was uploaded before.
    fn upload_split(&mut self, coord: ChunkCoord, split: usize, mesh: SplitMesh);

    fn release_split(&mut self, coord: ChunkCoord, split: usize);

    /// Called before the chunk is dropped.
    fn release_chunk(&mut self, coord: ChunkCoord);
}

/// Discards meshes, keeping counters and the face count of every live split.
#[derive(Debug, Default)]
pub struct NullBackend {
    pub uploads: usize,
    pub split_releases: usize,
    pub chunk_releases: usize,
    live: HashMap<(ChunkCoord, usize), usize>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Faces currently uploaded for a split.
    pub fn faces(&self, coord: ChunkCoord, split: usize) -> Option<usize> {
        self.live.get(&(coord, split)).copied()
    }

    pub fn total_faces(&self) -> usize {
        self.live.values().sum()
    }

    pub fn live_splits(&self) -> usize {
        self.live.len()
    }
}

impl RenderBackend for NullBackend {
    fn upload_split(&mut self, coord: ChunkCoord, split: usize, mesh: SplitMesh) {
        self.uploads += 1;
        self.live.insert((coord, split), mesh.face_count());
    }

    fn release_split(&mut self, coord: ChunkCoord, split: usize) {
        self.split_releases += 1;
        self.live.remove(&(coord, split));
    }

    fn release_chunk(&mut self, coord: ChunkCoord) {
        self.chunk_releases += 1;
        self.live.retain(|(c, _), _| *c != coord);
    }
}

#[derive(Debug)]
pub enum RenderMessage {
    Upload {
        coord: ChunkCoord,
        split: usize,
        mesh: SplitMesh,
    },
    ReleaseSplit {
        coord: ChunkCoord,
        split: usize,
    },
    ReleaseChunk {
        coord: ChunkCoord,
    },
}

/// Forwards every call to a render thread over an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelBackend {
    tx: Sender<RenderMessage>,
}

impl ChannelBackend {
    pub fn new() -> (Self, Receiver<RenderMessage>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    fn send(&self, msg: RenderMessage) {
        if self.tx.send(msg).is_err() {
            log::warn!("render channel closed; dropping message");
        }
    }
}

impl RenderBackend for ChannelBackend {
    fn upload_split(&mut self, coord: ChunkCoord, split: usize, mesh: SplitMesh) {
        self.send(RenderMessage::Upload { coord, split, mesh });
    }

    fn release_split(&mut self, coord: ChunkCoord, split: usize) {
        self.send(RenderMessage::ReleaseSplit { coord, split });
    }

    fn release_chunk(&mut self, coord: ChunkCoord) {
        self.send(RenderMessage::ReleaseChunk { coord });
    }
}
