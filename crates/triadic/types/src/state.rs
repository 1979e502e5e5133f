use serde::{Deserialize, Serialize};

use crate::mapping::{to_bounded, to_unbounded};

/// The seven named coordinates of a triadic state, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    X1,
    X2,
    X3,
    /// How locked-in (non-plastic) the state is.
    Closure,
    MemoryFast,
    MemorySlow,
    /// Resilience / remaining capacity.
    Dwelling,
}

impl Coordinate {
    pub const ALL: [Coordinate; 7] = [
        Coordinate::X1,
        Coordinate::X2,
        Coordinate::X3,
        Coordinate::Closure,
        Coordinate::MemoryFast,
        Coordinate::MemorySlow,
        Coordinate::Dwelling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::X3 => "x3",
            Self::Closure => "closure",
            Self::MemoryFast => "memory_fast",
            Self::MemorySlow => "memory_slow",
            Self::Dwelling => "dwelling",
        }
    }

    /// Facet coordinates are never altered by release.
    pub fn is_facet(self) -> bool {
        matches!(self, Self::X1 | Self::X2 | Self::X3)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of a [`TriadicState`] projected into bounded (0,1) space.
///
/// This is a detached copy: it never reflects later changes to any state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundedState {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub closure: f64,
    pub memory_fast: f64,
    pub memory_slow: f64,
    pub dwelling: f64,
}

impl BoundedState {
    /// Bounded profile that a default [`TriadicState`] corresponds to.
    pub const DEFAULT: BoundedState = BoundedState {
        x1: 0.2,
        x2: 0.1,
        x3: 0.15,
        closure: 0.05,
        memory_fast: 0.1,
        memory_slow: 0.1,
        dwelling: 0.6,
    };

    pub fn get(&self, coordinate: Coordinate) -> f64 {
        match coordinate {
            Coordinate::X1 => self.x1,
            Coordinate::X2 => self.x2,
            Coordinate::X3 => self.x3,
            Coordinate::Closure => self.closure,
            Coordinate::MemoryFast => self.memory_fast,
            Coordinate::MemorySlow => self.memory_slow,
            Coordinate::Dwelling => self.dwelling,
        }
    }

    /// All seven values keyed by coordinate name, in canonical order.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        Coordinate::ALL.map(|c| (c.name(), self.get(c)))
    }

    /// The three facet values, in order.
    pub fn facets(&self) -> [f64; 3] {
        [self.x1, self.x2, self.x3]
    }
}

impl Default for BoundedState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Seven-dimensional state vector held in unbounded (logit) space.
///
/// Values are immutable once constructed; transforms return a new state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriadicState {
    facets: [f64; 3],
    closure: f64,
    memory_fast: f64,
    memory_slow: f64,
    dwelling: f64,
}

impl TriadicState {
    /// Create a state from unbounded coordinates.
    pub fn new(
        facets: [f64; 3],
        closure: f64,
        memory_fast: f64,
        memory_slow: f64,
        dwelling: f64,
    ) -> Self {
        Self {
            facets,
            closure,
            memory_fast,
            memory_slow,
            dwelling,
        }
    }

    /// Create a state whose projection approximates `bounded`.
    pub fn from_bounded(bounded: &BoundedState) -> Self {
        Self {
            facets: bounded.facets().map(to_unbounded),
            closure: to_unbounded(bounded.closure),
            memory_fast: to_unbounded(bounded.memory_fast),
            memory_slow: to_unbounded(bounded.memory_slow),
            dwelling: to_unbounded(bounded.dwelling),
        }
    }

    /// Builder starting from the default profile.
    pub fn builder() -> TriadicStateBuilder {
        TriadicStateBuilder {
            state: Self::default(),
        }
    }

    pub fn facets(&self) -> [f64; 3] {
        self.facets
    }

    pub fn closure(&self) -> f64 {
        self.closure
    }

    pub fn memory_fast(&self) -> f64 {
        self.memory_fast
    }

    pub fn memory_slow(&self) -> f64 {
        self.memory_slow
    }

    pub fn dwelling(&self) -> f64 {
        self.dwelling
    }

    /// Unbounded value of a single coordinate.
    pub fn get(&self, coordinate: Coordinate) -> f64 {
        match coordinate {
            Coordinate::X1 => self.facets[0],
            Coordinate::X2 => self.facets[1],
            Coordinate::X3 => self.facets[2],
            Coordinate::Closure => self.closure,
            Coordinate::MemoryFast => self.memory_fast,
            Coordinate::MemorySlow => self.memory_slow,
            Coordinate::Dwelling => self.dwelling,
        }
    }

    /// Project every coordinate into bounded (0,1) space.
    pub fn project_bounded(&self) -> BoundedState {
        let [x1, x2, x3] = self.facets.map(to_bounded);
        BoundedState {
            x1,
            x2,
            x3,
            closure: to_bounded(self.closure),
            memory_fast: to_bounded(self.memory_fast),
            memory_slow: to_bounded(self.memory_slow),
            dwelling: to_bounded(self.dwelling),
        }
    }
}

impl Default for TriadicState {
    fn default() -> Self {
        Self::from_bounded(&BoundedState::DEFAULT)
    }
}

/// Builder for [`TriadicState`]. Every setter takes an unbounded value;
/// coordinates left unset keep their default.
#[derive(Clone, Debug)]
pub struct TriadicStateBuilder {
    state: TriadicState,
}

impl TriadicStateBuilder {
    pub fn z1(mut self, z: f64) -> Self {
        self.state.facets[0] = z;
        self
    }

    pub fn z2(mut self, z: f64) -> Self {
        self.state.facets[1] = z;
        self
    }

    pub fn z3(mut self, z: f64) -> Self {
        self.state.facets[2] = z;
        self
    }

    pub fn closure(mut self, z: f64) -> Self {
        self.state.closure = z;
        self
    }

    pub fn memory_fast(mut self, z: f64) -> Self {
        self.state.memory_fast = z;
        self
    }

    pub fn memory_slow(mut self, z: f64) -> Self {
        self.state.memory_slow = z;
        self
    }

    pub fn dwelling(mut self, z: f64) -> Self {
        self.state.dwelling = z;
        self
    }

    pub fn build(self) -> TriadicState {
        self.state
    }
}
