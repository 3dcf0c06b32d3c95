use std::io::Write;

use crate::capture_pipeline::common::error::Result;
use crate::capture_pipeline::decode::types::NormalizedImage;

pub trait ImageWriter {
    fn write_image(&self, image: &NormalizedImage, output: &mut dyn Write) -> Result<()>;
}
