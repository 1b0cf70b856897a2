use super::ImageU8;
use crate::error::FilterError;

/// Owned 8-bit grayscale buffer, row-major, tightly packed.
///
/// The filter allocates one of these for its output and hands disjoint
/// row bands of `data` to workers; callers get the whole buffer back once
/// every worker has joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Construct an owned grayscale buffer from raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer length must equal width * height"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Allocate a buffer filled with `fill`, surfacing allocation failure
    /// instead of aborting.
    pub fn try_filled(width: usize, height: usize, fill: u8) -> Result<Self, FilterError> {
        let requested = width
            .checked_mul(height)
            .ok_or(FilterError::Allocation {
                requested: usize::MAX,
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(requested)
            .map_err(|_| FilterError::Allocation { requested })?;
        data.resize(requested, fill);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
