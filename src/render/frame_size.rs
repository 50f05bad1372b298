///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}
