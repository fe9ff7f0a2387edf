// ── Lighting ──
//
// A space's light layout and the selection rules for `set_lights`.

use std::collections::{BTreeMap, BTreeSet};

use cdi_api::{LightId, LightLevel};

use crate::config::ZoneLayout;

/// Which lights a `set_lights` call turns on. Every other light in the
/// space is set to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightSelection {
    /// The space's full light set.
    All,
    /// A named preset from the space's zone layout.
    Preset(String),
    /// An explicit set of light ids.
    Explicit(BTreeSet<LightId>),
}

impl From<&str> for LightSelection {
    /// `"all"` selects everything; any other string names a preset.
    fn from(name: &str) -> Self {
        if name == "all" {
            Self::All
        } else {
            Self::Preset(name.to_owned())
        }
    }
}

impl<I: Into<LightId>> FromIterator<I> for LightSelection {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::Explicit(iter.into_iter().map(Into::into).collect())
    }
}

/// Lighting capability of one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lighting {
    lights: Vec<LightId>,
    presets: BTreeMap<String, BTreeSet<LightId>>,
}

/// A selection after preset lookup.
enum Resolved<'a> {
    All,
    Set(&'a BTreeSet<LightId>),
}

impl Resolved<'_> {
    fn contains(&self, light: &LightId) -> bool {
        match self {
            Self::All => true,
            Self::Set(set) => set.contains(light),
        }
    }
}

/// The preset name a selection asked for, when lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl Lighting {
    pub fn from_zone(zone: &ZoneLayout) -> Self {
        Self {
            lights: zone.all.clone(),
            presets: zone
                .presets
                .iter()
                .map(|(name, lights)| (name.clone(), lights.iter().cloned().collect()))
                .collect(),
        }
    }

    /// Every light in the space, in the order levels are sent.
    pub fn lights(&self) -> &[LightId] {
        &self.lights
    }

    /// Named presets (the zone layout minus `all`).
    pub fn presets(&self) -> &BTreeMap<String, BTreeSet<LightId>> {
        &self.presets
    }

    fn resolve<'a>(&'a self, selection: &'a LightSelection) -> Result<Resolved<'a>, UnknownPreset> {
        match selection {
            LightSelection::All => Ok(Resolved::All),
            LightSelection::Preset(name) => self
                .presets
                .get(name)
                .map(Resolved::Set)
                .ok_or_else(|| UnknownPreset(name.clone())),
            LightSelection::Explicit(set) => Ok(Resolved::Set(set)),
        }
    }

    /// One assignment per light, in `lights()` order: `level` for selected
    /// lights, 0 for the rest.
    ///
    /// Selected ids that are not part of the space are ignored.
    pub fn levels(
        &self,
        level: u8,
        selection: &LightSelection,
    ) -> Result<Vec<LightLevel>, UnknownPreset> {
        let selected = self.resolve(selection)?;
        Ok(self
            .lights
            .iter()
            .map(|light| LightLevel {
                light: light.clone(),
                level: if selected.contains(light) { level } else { 0 },
            })
            .collect())
    }
}
