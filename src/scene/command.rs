use super::light::LightGroup;
use super::material::ShadingMode;
use super::RingId;

/// A user intent applied to the scene with [`Scene::apply`](super::Scene::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Starts or stops a ring's vertical motion.
    SetRingMotion { ring: RingId, active: bool },
    /// Selects the lit shading model of every switchable entity.
    SetShading(ShadingMode),
    /// Flips the master switch between lit and basic materials.
    ToggleLights,
    /// Flips one light group on or off.
    ToggleLight(LightGroup),
    /// Flips the wireframe flag of every lit material.
    ToggleWireframe,
}

/// Translates key events into [`Command`]s.
///
/// Ring keys are held: press starts the motion and release stops it. The
/// wireframe key fires once per press; auto-repeated presses are ignored
/// until the key is released.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    wireframe_latched: bool,
}

impl InputMapper {
    /// Creates a mapper with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key press. Letters are case-insensitive.
    pub fn key_down(&mut self, key: char) -> Option<Command> {
        if let Some(ring) = ring_for(key) {
            return Some(Command::SetRingMotion { ring, active: true });
        }
        let command = match key.to_ascii_uppercase() {
            '4' => {
                if self.wireframe_latched {
                    return None;
                }
                self.wireframe_latched = true;
                Command::ToggleWireframe
            }
            'Q' => Command::SetShading(ShadingMode::Lambert),
            'W' => Command::SetShading(ShadingMode::Phong),
            'E' => Command::SetShading(ShadingMode::Toon),
            'R' => Command::SetShading(ShadingMode::Normal),
            'T' => Command::ToggleLights,
            'D' => Command::ToggleLight(LightGroup::Directional),
            'S' => Command::ToggleLight(LightGroup::Spot),
            'P' => Command::ToggleLight(LightGroup::Point),
            _ => return None,
        };
        Some(command)
    }

    /// Handles a key release.
    pub fn key_up(&mut self, key: char) -> Option<Command> {
        if let Some(ring) = ring_for(key) {
            return Some(Command::SetRingMotion { ring, active: false });
        }
        if key == '4' {
            self.wireframe_latched = false;
        }
        None
    }
}

fn ring_for(key: char) -> Option<RingId> {
    match key {
        '1' => Some(RingId::Big),
        '2' => Some(RingId::Medium),
        '3' => Some(RingId::Small),
        _ => None,
    }
}
