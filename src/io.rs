// Snapshot and frame export. Full-state snapshots are gzip-compressed bincode
// so a long run can be resumed; per-frame JSON dumps are the hand-off format
// for an external renderer.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::Path;

use crate::body::Body;
use crate::config::SimParams;
use crate::profile_scope;
use crate::simulation::Simulation;

#[derive(Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub bodies: Vec<Body>,
    pub params: SimParams,
    pub frame: usize,
}

impl SimulationState {
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self {
            bodies: sim.bodies.clone(),
            params: sim.params,
            frame: sim.frame,
        }
    }

    pub fn into_simulation(self) -> Simulation {
        let mut sim = Simulation::new(self.params, self.bodies);
        sim.frame = self.frame;
        sim
    }
}

pub fn save_state<P: AsRef<Path>>(path: P, sim: &Simulation) -> std::io::Result<()> {
    profile_scope!("save_state");
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let state = SimulationState::from_simulation(sim);

    // Write to a temporary file first so an interrupted run never leaves a
    // truncated snapshot behind.
    let tmp_path = path.with_extension({
        let mut os = path.extension().map(|e| e.to_os_string()).unwrap_or_default();
        os.push(".tmp");
        os
    });
    {
        let file = std::fs::File::create(&tmp_path)?;
        let writer = BufWriter::new(file);
        let mut encoder = GzEncoder::new(writer, Compression::fast());
        bincode::serialize_into(&mut encoder, &state)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut writer = encoder.finish()?;
        writer.flush()?;
    }
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_state<P: AsRef<Path>>(path: P) -> std::io::Result<SimulationState> {
    profile_scope!("load_state");
    let data = std::fs::read(path.as_ref())?;
    let bytes = match maybe_decompress_gzip(&data)? {
        Some(decoded) => decoded,
        None => data,
    };
    bincode::deserialize::<SimulationState>(&bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// One body as the renderer sees it: position, velocity, nothing else.
#[derive(Serialize)]
struct FrameBody {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

#[derive(Serialize)]
struct Frame<'a> {
    frame: usize,
    bodies: &'a [FrameBody],
}

/// Dump the current body positions/velocities for an external renderer.
pub fn write_frame_json<P: AsRef<Path>>(path: P, bodies: &[Body], frame: usize) -> std::io::Result<()> {
    profile_scope!("write_frame");
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rows: Vec<FrameBody> = bodies
        .iter()
        .map(|b| FrameBody {
            x: b.pos.x,
            y: b.pos.y,
            vx: b.vel.x,
            vy: b.vel.y,
        })
        .collect();

    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(
        writer,
        &Frame {
            frame,
            bodies: &rows,
        },
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    Ok(())
}

fn maybe_decompress_gzip(data: &[u8]) -> std::io::Result<Option<Vec<u8>>> {
    if data.len() < 2 || data[0] != 0x1f || data[1] != 0x8b {
        return Ok(None);
    }

    let mut decoder = GzDecoder::new(Cursor::new(data));
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;
    Ok(Some(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::DVec2;

    #[test]
    fn snapshot_round_trips_through_gzip_bincode() {
        let params = SimParams::default();
        let bodies = vec![
            Body::new(DVec2::new(1.0, 2.0), DVec2::new(0.1, -0.2), 3.0),
            Body::new(DVec2::new(-4.0, 0.5), DVec2::zero(), 1.5),
        ];
        let mut sim = Simulation::new(params, bodies);
        sim.frame = 17;

        let dir = std::env::temp_dir().join("gravitree_io_test");
        let path = dir.join("state.bin.gz");
        save_state(&path, &sim).unwrap();

        let state = load_state(&path).unwrap();
        assert_eq!(state.frame, 17);
        assert_eq!(state.bodies.len(), 2);
        assert_eq!(state.bodies[0].pos, DVec2::new(1.0, 2.0));
        assert_eq!(state.bodies[1].mass, 1.5);

        std::fs::remove_file(&path).ok();
    }
}
