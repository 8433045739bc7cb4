//! Fixed-arity edge weight tuples
//!
//! Every edge carries one value per [`WeightKind`]. Algorithms pick the
//! component they optimize over (travel time for fastest routes, price for
//! cheapest routes and spanning trees, flight count for frequency weighting).

use std::ops::Index;

/// Number of weight components carried by every edge
pub const WEIGHT_ARITY: usize = 3;

/// Selects one component of an [`EdgeWeights`] tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKind {
    /// Travel time along the edge
    Time,
    /// Cost of using the edge
    Price,
    /// Traffic count (e.g. number of flights operating the route)
    Flights,
}

impl WeightKind {
    /// All kinds, in tuple order
    pub const ALL: [Self; WEIGHT_ARITY] = [Self::Time, Self::Price, Self::Flights];

    /// Position of this kind inside the weight tuple
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Time => 0,
            Self::Price => 1,
            Self::Flights => 2,
        }
    }
}

/// Weight tuple attached to an edge
///
/// # Example
///
/// ```
/// use trueno_routes::{EdgeWeights, WeightKind};
///
/// let w = EdgeWeights::new(90.0, 120.0, 4.0);
/// assert_eq!(w.get(WeightKind::Price), 120.0);
/// assert_eq!(w[WeightKind::Flights], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeWeights([f64; WEIGHT_ARITY]);

impl EdgeWeights {
    /// Build a tuple from its components
    #[must_use]
    pub const fn new(time: f64, price: f64, flights: f64) -> Self {
        Self([time, price, flights])
    }

    /// Same value in every component (handy for unweighted graphs)
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self([value; WEIGHT_ARITY])
    }

    /// Component selected by `kind`
    #[must_use]
    pub fn get(&self, kind: WeightKind) -> f64 {
        self.0[kind.index()]
    }

    /// Raw components, in [`WeightKind::ALL`] order
    #[must_use]
    pub const fn as_array(&self) -> &[f64; WEIGHT_ARITY] {
        &self.0
    }
}

impl From<[f64; WEIGHT_ARITY]> for EdgeWeights {
    fn from(values: [f64; WEIGHT_ARITY]) -> Self {
        Self(values)
    }
}

impl Index<WeightKind> for EdgeWeights {
    type Output = f64;

    fn index(&self, kind: WeightKind) -> &f64 {
        &self.0[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_indices_match_tuple_order() {
        let w = EdgeWeights::from([1.0, 2.0, 3.0]);
        for (i, kind) in WeightKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(w.get(*kind), w.as_array()[i]);
        }
    }

    #[test]
    fn test_uniform() {
        let w = EdgeWeights::uniform(1.0);
        assert_eq!(w, EdgeWeights::new(1.0, 1.0, 1.0));
    }
}
