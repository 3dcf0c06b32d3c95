use crate::capture_pipeline::common::error::Result;
use crate::capture_pipeline::decode::types::NormalizedImage;

pub trait DisplaySink {
    /// Present the image and block until the viewer is done with it.
    fn display(&mut self, image: &NormalizedImage) -> Result<()>;
}
