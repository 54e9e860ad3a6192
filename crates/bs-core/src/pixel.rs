/// One 24-bit pixel in blue, green, red channel order.
///
/// `#[repr(C)]` with three `u8` fields has size 3 and alignment 1, so a
/// `[Bgr8]` slice has the same layout as the packed bytes of a bitmap row.
/// Serialization still goes through [`Bgr8::to_bytes`] and never relies on
/// that layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Bgr8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr8 {
    /// Number of channels, and bytes, per pixel.
    pub const CHANNELS: usize = 3;

    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Pixel with every channel set to `v`.
    pub const fn splat(v: u8) -> Self {
        Self { b: v, g: v, r: v }
    }

    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
        }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<[u8; 3]> for Bgr8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Bgr8> for [u8; 3] {
    fn from(px: Bgr8) -> Self {
        px.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::Bgr8;

    #[test]
    fn layout_is_three_packed_bytes() {
        assert_eq!(std::mem::size_of::<Bgr8>(), Bgr8::CHANNELS);
        assert_eq!(std::mem::align_of::<Bgr8>(), 1);
    }

    #[test]
    fn byte_order_is_blue_green_red() {
        let px = Bgr8::from_bytes([10, 20, 30]);
        assert_eq!(px, Bgr8::new(10, 20, 30));
        assert_eq!(px.b, 10);
        assert_eq!(px.r, 30);
        assert_eq!(<[u8; 3]>::from(px), [10, 20, 30]);
    }
}
