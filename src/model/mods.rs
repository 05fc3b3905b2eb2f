use rosu_mods::GameModsLegacy;

/// Mods that affect the difficulty calculation.
///
/// Accepted conversions are
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
///
/// See <https://github.com/ppy/osu-api/wiki#mods>
#[derive(Clone, Debug, PartialEq)]
pub enum GameMods {
    Legacy(GameModsLegacy),
    Bits(u32),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self::Legacy(GameModsLegacy::NoMod);

    /// The clock rate implied by the mods i.e. 1.5 for DT/NC, 0.75 for HT and
    /// 1.0 otherwise.
    pub fn clock_rate(&self) -> f64 {
        if self.dt() || self.nc() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// Apply HR or EZ onto the given overall difficulty.
    pub fn apply_od(&self, od: f64) -> f64 {
        if self.hr() {
            (od * 1.4).min(10.0)
        } else if self.ez() {
            od * 0.5
        } else {
            od
        }
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $bits:expr => $name:ident, )* ) => {
        impl GameMods {
            $(
                pub fn $fn(&self) -> bool {
                    match self {
                        Self::Legacy(mods) => mods.contains(GameModsLegacy::$name),
                        Self::Bits(bits) => *bits & ($bits) != 0,
                    }
                }
            )*
        }
    };
}

impl_has_mod! {
    ez: 1 << 1 => Easy,
    hr: 1 << 4 => HardRock,
    dt: 1 << 6 => DoubleTime,
    rx: 1 << 7 => Relax,
    ht: 1 << 8 => HalfTime,
    nc: 1 << 9 => Nightcore,
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self::Bits(bits)
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self::Legacy(mods)
    }
}
