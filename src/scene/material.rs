/// Lit shading models selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingMode {
    Lambert,
    Phong,
    Toon,
    Normal,
}

impl ShadingMode {
    /// All modes in key order (Q, W, E, R).
    pub const ALL: [ShadingMode; 4] = [
        ShadingMode::Lambert,
        ShadingMode::Phong,
        ShadingMode::Toon,
        ShadingMode::Normal,
    ];

    fn index(self) -> usize {
        match self {
            ShadingMode::Lambert => 0,
            ShadingMode::Phong => 1,
            ShadingMode::Toon => 2,
            ShadingMode::Normal => 3,
        }
    }
}

/// How a material is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Unlit flat colour.
    Basic,
    /// Flat colour sampled from the dome texture.
    Textured,
    /// One of the lit models.
    Lit(ShadingMode),
}

/// Which faces of a mesh are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
    Double,
}

/// A renderer-agnostic material description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    pub shading: Shading,
    /// 24-bit RGB colour. Ignored by [`ShadingMode::Normal`] and textures.
    pub color: u32,
    pub wireframe: bool,
    pub side: Side,
}

impl Material {
    /// A lit, double-sided material.
    #[must_use]
    pub fn lit(mode: ShadingMode, color: u32) -> Self {
        Self {
            shading: Shading::Lit(mode),
            color,
            wireframe: false,
            side: Side::Double,
        }
    }

    /// An unlit, front-sided material.
    #[must_use]
    pub fn basic(color: u32) -> Self {
        Self {
            shading: Shading::Basic,
            color,
            wireframe: false,
            side: Side::Front,
        }
    }

    /// Returns a copy drawn from the given side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// Colours of the four stock lit materials.
pub const LAMBERT_RED: u32 = 0xFF_0000;
pub const PHONG_AMBER: u32 = 0xFF_C000;
pub const TOON_GREEN: u32 = 0x00_6400;
pub const LIGHT_BLUE: u32 = 0xAD_D8E6;

/// Per-entity material lookup: one lit material per [`ShadingMode`], one
/// unlit fallback, and the mode currently selected.
///
/// Entities with a fixed look (rings, cylinder, dome) use
/// [`MaterialTable::fixed`], which stores the same lit material in every slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTable {
    lit: [Material; 4],
    basic: Material,
    current: ShadingMode,
    switchable: bool,
}

impl MaterialTable {
    /// The stock table used by parametric surfaces and the Möbius strip.
    #[must_use]
    pub fn shaded(initial: ShadingMode) -> Self {
        Self {
            lit: [
                Material::lit(ShadingMode::Lambert, LAMBERT_RED),
                Material::lit(ShadingMode::Phong, PHONG_AMBER),
                Material::lit(ShadingMode::Toon, TOON_GREEN),
                Material::lit(ShadingMode::Normal, 0xFF_FFFF),
            ],
            basic: Material::basic(LIGHT_BLUE),
            current: initial,
            switchable: true,
        }
    }

    /// A table that always shows `lit` when lighting is on and ignores
    /// shading changes.
    #[must_use]
    pub fn fixed(lit: Material, basic: Material) -> Self {
        let current = match lit.shading {
            Shading::Lit(mode) => mode,
            Shading::Basic | Shading::Textured => ShadingMode::Phong,
        };
        Self {
            lit: [lit; 4],
            basic,
            current,
            switchable: false,
        }
    }

    /// Selects `mode`. Returns `false` for fixed tables, which stay unchanged.
    pub fn select(&mut self, mode: ShadingMode) -> bool {
        if !self.switchable {
            return false;
        }
        self.current = mode;
        true
    }

    /// The currently selected shading mode.
    #[must_use]
    pub fn current_mode(&self) -> ShadingMode {
        self.current
    }

    /// The material a renderer should bind, given the master lighting switch.
    #[must_use]
    pub fn active(&self, lights_on: bool) -> &Material {
        if lights_on {
            &self.lit[self.current.index()]
        } else {
            &self.basic
        }
    }

    /// The lit material for `mode`.
    #[must_use]
    pub fn get(&self, mode: ShadingMode) -> &Material {
        &self.lit[mode.index()]
    }

    /// Sets the wireframe flag on every lit material.
    ///
    /// Basic materials keep solid fill so the unlit view stays readable.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        for m in &mut self.lit {
            if matches!(m.shading, Shading::Lit(_)) {
                m.wireframe = wireframe;
            }
        }
    }
}
