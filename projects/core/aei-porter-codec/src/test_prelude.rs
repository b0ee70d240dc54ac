//! Shared helpers for codec tests.
#![allow(dead_code)]

use image::{Rgba, RgbaImage};

/// Builds a deterministic RGBA test image with per-pixel variation.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 17 % 256) as u8,
            (y * 29 % 256) as u8,
            ((x + y) * 13 % 256) as u8,
            255,
        ])
    })
}

/// Assembles raw container bytes from header fields and a payload.
///
/// Lets tests build containers the writer would refuse to produce
/// (mipmapped descriptors, out-of-bounds regions).
pub fn container_bytes(
    descriptor: u8,
    width: u16,
    height: u16,
    regions: &[(u16, u16, u16, u16)],
    payload: &[u8],
) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&crate::AEI_MAGIC);
    bytes.push(descriptor);
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&(regions.len() as u16).to_le_bytes());
    for (x, y, w, h) in regions {
        bytes.extend_from_slice(&x.to_le_bytes());
        bytes.extend_from_slice(&y.to_le_bytes());
        bytes.extend_from_slice(&w.to_le_bytes());
        bytes.extend_from_slice(&h.to_le_bytes());
    }
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}
