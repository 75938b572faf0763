//! Headless driver for the ring scene.
//!
//! Builds the scene, replays a scripted key sequence through the
//! [`InputMapper`], ticks at 60 Hz and logs what a renderer would see.
//!
//! ```text
//! cargo run --example headless                      # default seed
//! cargo run --example headless -- 42                # custom shuffle seed
//! RUST_LOG=parascene=debug cargo run --example headless
//! ```

use parascene::scene::{InputMapper, RingId, Scene, SceneConfig};
use parascene::Result;

const FRAME: f64 = 1.0 / 60.0;

/// `(frame, key, pressed)` events replayed in order.
const SCRIPT: &[(u32, char, bool)] = &[
    (10, '1', true),
    (20, 'e', true),
    (60, '2', true),
    (120, '4', true),
    (121, '4', true),
    (125, '4', false),
    (200, 't', true),
    (260, 't', true),
    (300, 's', true),
    (310, '1', false),
    (400, '2', false),
];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this crate.
    // Override with RUST_LOG (e.g. RUST_LOG=parascene=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("parascene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(SceneConfig::default().seed);
    let mut scene = Scene::new(SceneConfig {
        seed,
        ..SceneConfig::default()
    })?;
    let mut input = InputMapper::new();

    let last = SCRIPT.iter().map(|&(frame, _, _)| frame).max().unwrap_or(0) + 60;
    let mut events = SCRIPT.iter().peekable();
    for frame in 0..=last {
        while let Some(&&(at, key, pressed)) = events.peek() {
            if at != frame {
                break;
            }
            let command = if pressed {
                input.key_down(key)
            } else {
                input.key_up(key)
            };
            if let Some(command) = command {
                scene.apply(command);
            }
            events.next();
        }
        scene.tick(FRAME);

        if frame % 60 == 0 {
            for ring in RingId::ALL {
                let state = scene.ring(ring)?;
                tracing::info!(
                    frame,
                    ?ring,
                    position = state.oscillator().position(),
                    active = state.is_active(),
                    "ring"
                );
            }
        }
    }

    let triangles: usize = scene.entities().map(|(_, e)| e.mesh.triangle_count()).sum();
    tracing::info!(
        triangles,
        lights_on = scene.lights_on(),
        wireframe = scene.wireframe(),
        shading = ?scene.shading(),
        "final state"
    );
    Ok(())
}
