//! Decoded capture data types

/// Plane order of a composed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Native capture order: red, green, blue.
    Rgb,
    /// Sink order: blue, green, red.
    Bgr,
}

/// The three channel planes exactly as extracted from a capture, before
/// any rescaling. Each plane is `side * side` samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChannels {
    pub side: usize,
    pub red: Vec<u16>,
    pub green: Vec<u16>,
    pub blue: Vec<u16>,
}

/// One color channel as a square row-major grid of unit-interval samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlane {
    pub side: usize,
    pub samples: Vec<f32>,
}

impl ChannelPlane {
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.samples[row * self.side + col]
    }

    /// Largest sample in the plane, 0.0 for an empty plane.
    pub fn max(&self) -> f32 {
        self.samples.iter().copied().fold(0.0, f32::max)
    }
}

/// Three normalized channel planes ready for a display or export sink.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    pub side: usize,
    /// Planes stored in the order given by `order`.
    pub planes: [ChannelPlane; 3],
    pub order: ChannelOrder,
}

impl NormalizedImage {
    /// Swap the first and last plane. Captures decode to R,G,B while the
    /// sinks consume planes in B,G,R order; the pipeline applies this
    /// exactly once before handing the image over. Applying it to an
    /// already swapped image restores the native order.
    pub fn into_display_order(mut self) -> Self {
        self.planes.swap(0, 2);
        self.order = match self.order {
            ChannelOrder::Rgb => ChannelOrder::Bgr,
            ChannelOrder::Bgr => ChannelOrder::Rgb,
        };
        self
    }

    pub fn red(&self) -> &ChannelPlane {
        match self.order {
            ChannelOrder::Rgb => &self.planes[0],
            ChannelOrder::Bgr => &self.planes[2],
        }
    }

    pub fn green(&self) -> &ChannelPlane {
        &self.planes[1]
    }

    pub fn blue(&self) -> &ChannelPlane {
        match self.order {
            ChannelOrder::Rgb => &self.planes[2],
            ChannelOrder::Bgr => &self.planes[0],
        }
    }
}
