//! Telea inpainting.
//!
//! Fills masked pixels by fast marching inwards from the mask boundary.
//! Each newly reached pixel takes a weighted mean of first-order estimates
//! from the settled pixels within the inpainting radius: a neighbour's
//! colour plus its image gradient projected onto the offset to the pixel.
//! Weights favour neighbours that are close, that lie along the marching
//! direction, and that sit on a similar level set of the arrival-time field.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hsvmask_core::{Error, Result};
use image::{GrayImage, RgbImage};

/// Neighbourhood radius used when none is given.
pub const DEFAULT_INPAINT_RADIUS: u32 = 3;

/// Arrival time of pixels the front has not reached.
const UNREACHED: f32 = 1.0e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    /// Finalized: original pixel or already inpainted and popped.
    Known,
    /// On the marching front (queued).
    Band,
    /// Still to be filled.
    Inside,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest arrival time first.
#[derive(Debug, Clone, Copy)]
struct FrontPixel {
    time: f32,
    idx: usize,
}

impl Ord for FrontPixel {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for FrontPixel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontPixel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontPixel {}

/// Arrival-time field and pixel states for one inpainting run.
struct MarchingField {
    width: usize,
    height: usize,
    flags: Vec<Flag>,
    time: Vec<f32>,
}

impl MarchingField {
    fn new(mask: &GrayImage) -> Self {
        let flags: Vec<Flag> = mask
            .as_raw()
            .iter()
            .map(|&m| if m > 0 { Flag::Inside } else { Flag::Known })
            .collect();
        let time = flags
            .iter()
            .map(|&f| if f == Flag::Inside { UNREACHED } else { 0.0 })
            .collect();
        Self {
            width: mask.width() as usize,
            height: mask.height() as usize,
            flags,
            time,
        }
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn coords(&self, idx: usize) -> (isize, isize) {
        ((idx % self.width) as isize, (idx / self.width) as isize)
    }

    fn neighbours(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = self.coords(idx);
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .into_iter()
            .filter_map(move |(nx, ny)| self.index(nx, ny))
    }

    /// Known pixels touching the hole; the initial front.
    fn boundary(&self) -> Vec<usize> {
        (0..self.flags.len())
            .filter(|&idx| {
                self.flags[idx] == Flag::Known
                    && self
                        .neighbours(idx)
                        .any(|n| self.flags[n] == Flag::Inside)
            })
            .collect()
    }

    /// First-order eikonal update from one horizontal and one vertical neighbour.
    ///
    /// Any neighbour outside the hole counts, whether finalized or still on
    /// the front.
    fn solve(&self, a: Option<usize>, b: Option<usize>) -> f32 {
        match (self.settled_time(a), self.settled_time(b)) {
            (Some(t1), Some(t2)) => {
                let gap = t1 - t2;
                if gap.abs() >= 1.0 {
                    1.0 + t1.min(t2)
                } else {
                    (t1 + t2 + (2.0 - gap * gap).sqrt()) * 0.5
                }
            }
            (Some(t), None) | (None, Some(t)) => 1.0 + t,
            (None, None) => UNREACHED,
        }
    }

    fn arrival_time(&self, idx: usize) -> f32 {
        let (x, y) = self.coords(idx);
        let left = self.index(x - 1, y);
        let right = self.index(x + 1, y);
        let up = self.index(x, y - 1);
        let down = self.index(x, y + 1);
        [
            self.solve(left, up),
            self.solve(right, up),
            self.solve(left, down),
            self.solve(right, down),
        ]
        .into_iter()
        .fold(UNREACHED, f32::min)
    }

    fn settled_time(&self, idx: Option<usize>) -> Option<f32> {
        idx.filter(|&i| self.flags[i] != Flag::Inside)
            .map(|i| self.time[i])
    }

    /// Gradient of the arrival-time field at `idx`, as `(dx, dy)`.
    fn gradient(&self, idx: usize) -> (f32, f32) {
        self.central_difference(idx, |i| self.time[i])
    }

    /// Gradient of `sample` at `idx`, using only pixels outside the hole.
    ///
    /// Central difference where both sides are settled, one-sided where only
    /// one is, zero otherwise.
    fn central_difference(&self, idx: usize, sample: impl Fn(usize) -> f32) -> (f32, f32) {
        let (x, y) = self.coords(idx);
        let settled = |i: Option<usize>| i.filter(|&i| self.flags[i] != Flag::Inside);
        let axis = |prev: Option<usize>, next: Option<usize>| {
            match (settled(prev), settled(next)) {
                (Some(p), Some(n)) => (sample(n) - sample(p)) * 0.5,
                (None, Some(n)) => sample(n) - sample(idx),
                (Some(p), None) => sample(idx) - sample(p),
                (None, None) => 0.0,
            }
        };
        (
            axis(self.index(x - 1, y), self.index(x + 1, y)),
            axis(self.index(x, y - 1), self.index(x, y + 1)),
        )
    }
}

/// Weight of a known neighbour at offset `r = pixel - neighbour`.
fn neighbour_weight(r: (f32, f32), grad: (f32, f32), level_gap: f32) -> f32 {
    let len_sq = r.0 * r.0 + r.1 * r.1;
    let distance = 1.0 / (len_sq * len_sq.sqrt());
    let level = 1.0 / (1.0 + level_gap.abs());
    let mut direction = r.0 * grad.0 + r.1 * grad.1;
    if direction.abs() <= 0.01 {
        direction = 1.0e-6;
    }
    (direction * distance * level).abs()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fill_pixel(field: &MarchingField, out: &mut RgbImage, idx: usize, radius: isize) {
    let (x, y) = field.coords(idx);
    let grad = field.gradient(idx);
    let here = field.time[idx];

    let mut sum = [0.0f32; 3];
    let mut weight_sum = 0.0f32;
    let raw = out.as_raw();

    for ny in (y - radius)..=(y + radius) {
        for nx in (x - radius)..=(x + radius) {
            let (dx, dy) = (x - nx, y - ny);
            if (dx == 0 && dy == 0) || dx * dx + dy * dy > radius * radius {
                continue;
            }
            let Some(n) = field.index(nx, ny) else {
                continue;
            };
            if field.flags[n] == Flag::Inside {
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let r = (dx as f32, dy as f32);
            let w = neighbour_weight(r, grad, field.time[n] - here);
            for (c, acc) in sum.iter_mut().enumerate() {
                let (gx, gy) = field.central_difference(n, |i| f32::from(raw[i * 3 + c]));
                let estimate = f32::from(raw[n * 3 + c]) + gx * r.0 + gy * r.1;
                *acc += w * estimate;
            }
            weight_sum += w;
        }
    }

    if weight_sum <= f32::EPSILON {
        return;
    }
    let buf: &mut [u8] = out;
    for (dst, acc) in buf[idx * 3..idx * 3 + 3].iter_mut().zip(sum) {
        *dst = (acc / weight_sum).round().clamp(0.0, 255.0) as u8;
    }
}

/// Inpaints the pixels of `image` where `mask` is non-zero.
///
/// Pixels outside the mask are copied unchanged. `radius` is the
/// neighbourhood radius in pixels and is raised to at least 1.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if `mask` and `image` differ in size.
pub fn telea_inpaint(image: &RgbImage, mask: &GrayImage, radius: u32) -> Result<RgbImage> {
    if image.dimensions() != mask.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: image.dimensions(),
            found: mask.dimensions(),
        });
    }

    let mut out = image.clone();
    let mut field = MarchingField::new(mask);
    let radius = isize::try_from(radius.max(1)).unwrap_or(isize::MAX);

    let mut heap = BinaryHeap::new();
    for idx in field.boundary() {
        field.flags[idx] = Flag::Band;
        heap.push(FrontPixel { time: 0.0, idx });
    }

    while let Some(FrontPixel { idx, .. }) = heap.pop() {
        field.flags[idx] = Flag::Known;

        let reached: Vec<usize> = field
            .neighbours(idx)
            .filter(|&n| field.flags[n] == Flag::Inside)
            .collect();
        for n in reached {
            let time = field.arrival_time(n);
            field.time[n] = time;
            fill_pixel(&field, &mut out, n, radius);
            field.flags[n] = Flag::Band;
            heap.push(FrontPixel { time, idx: n });
        }
    }

    Ok(out)
}
