//! Parameter derivation for the Fruchterman-Reingold algorithm.

/// Tuning parameters for one Fruchterman-Reingold run.
///
/// The ideal edge length is normally derived from the canvas area and the
/// node count via [`FruchtermanParams::for_canvas`]; the fields are public
/// so a driver can override any of them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FruchtermanParams {
    /// Ideal edge length `l`, the spring rest length of the model.
    pub ideal_length: f32,
    /// Geometric cooling factor applied to the temperature each iteration.
    pub cooling: f32,
    /// Canvas width in layout units.
    pub width: f32,
    /// Canvas height in layout units.
    pub height: f32,
}

impl FruchtermanParams {
    /// Multiplier on the temperature after each iteration.
    pub const DEFAULT_COOLING: f32 = 0.99;

    /// Scaling constant `C` in the ideal length formula `C * sqrt(area / n)`.
    pub const DEFAULT_CONSTANT: f32 = 0.7;

    /// Derives parameters for `node_count` nodes on a `width` x `height`
    /// canvas using [`Self::DEFAULT_CONSTANT`].
    pub fn for_canvas(node_count: usize, width: f32, height: f32) -> Self {
        Self::with_constant(node_count, width, height, Self::DEFAULT_CONSTANT)
    }

    /// Derives parameters with an explicit scaling constant.
    ///
    /// A node count of zero is treated as one so the ideal length stays
    /// finite.
    pub fn with_constant(node_count: usize, width: f32, height: f32, constant: f32) -> Self {
        let area = width * height;
        let n = node_count.max(1) as f32;

        Self {
            ideal_length: constant * (area / n).sqrt(),
            cooling: Self::DEFAULT_COOLING,
            width,
            height,
        }
    }

    /// Replaces the cooling factor, keeping everything else.
    pub fn with_cooling(self, cooling: f32) -> Self {
        Self { cooling, ..self }
    }

    /// Starting temperature for a run on this canvas.
    pub(crate) fn initial_temperature(&self) -> f32 {
        self.height / 8.0
    }
}
