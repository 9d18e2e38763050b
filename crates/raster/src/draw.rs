//! Software drawing primitives: circles, thick strokes, quadratic curves,
//! radial gradients. All operations clip to the surface, take a draw-state
//! alpha, and silently no-op on degenerate inputs.

use glam::Vec2;

use crate::surface::{Pixel, Surface};

/// Segments a quadratic curve is flattened into before stroking.
const CURVE_STEPS: u32 = 16;

impl Surface {
    /// Filled circle, scanline over the bounding box.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Pixel, alpha: f32) {
        if self.is_empty() || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let (x0, y0, x1, y1) = clip_box(self, center, radius);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Circle outline of the given stroke width.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Pixel, alpha: f32) {
        if self.is_empty() || radius <= 0.0 || width <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let (x0, y0, x1, y1) = clip_box(self, center, radius + half);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - radius).abs() <= half {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Thick line segment with round caps (distance-to-segment scan).
    pub fn stroke_segment(&mut self, a: Vec2, b: Vec2, width: f32, color: Pixel, alpha: f32) {
        if self.is_empty() || width <= 0.0 {
            return;
        }
        let half = (width * 0.5).max(0.5);
        let min = a.min(b) - Vec2::splat(half + 1.0);
        let max = a.max(b) + Vec2::splat(half + 1.0);
        let x0 = (min.x.floor() as i32).max(0);
        let y0 = (min.y.floor() as i32).max(0);
        let x1 = (max.x.ceil() as i32).min(self.width() as i32 - 1);
        let y1 = (max.y.ceil() as i32).min(self.height() as i32 - 1);
        let ab = b - a;
        let len2 = ab.length_squared();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len2 > 0.0 {
                    ((p - a).dot(ab) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = p.distance(a + ab * t);
                if d <= half {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Quadratic Bézier stroke from `a` through control point `ctrl` to `b`,
    /// flattened into short segments. Round caps make the joints seamless.
    pub fn stroke_quad_curve(
        &mut self,
        a: Vec2,
        ctrl: Vec2,
        b: Vec2,
        width: f32,
        color: Pixel,
        alpha: f32,
    ) {
        if self.is_empty() || width <= 0.0 {
            return;
        }
        let mut prev = a;
        for i in 1..=CURVE_STEPS {
            let t = i as f32 / CURVE_STEPS as f32;
            let inv = 1.0 - t;
            let p = a * (inv * inv) + ctrl * (2.0 * inv * t) + b * (t * t);
            self.stroke_segment(prev, p, width, color, alpha);
            prev = p;
        }
    }

    /// Radial gradient disc. `stops` are `(offset in [0,1], color)` pairs in
    /// ascending offset order; color alpha channels carry the falloff.
    pub fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[(f32, Pixel)],
        alpha: f32,
    ) {
        if self.is_empty() || radius <= 0.0 || stops.is_empty() {
            return;
        }
        let (x0, y0, x1, y1) = clip_box(self, center, radius);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if d <= radius {
                    let color = sample_stops(stops, d / radius);
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }
}

fn clip_box(surface: &Surface, center: Vec2, radius: f32) -> (i32, i32, i32, i32) {
    let x0 = ((center.x - radius).floor() as i32).max(0);
    let y0 = ((center.y - radius).floor() as i32).max(0);
    let x1 = ((center.x + radius).ceil() as i32).min(surface.width() as i32 - 1);
    let y1 = ((center.y + radius).ceil() as i32).min(surface.height() as i32 - 1);
    (x0, y0, x1, y1)
}

fn sample_stops(stops: &[(f32, Pixel)], t: f32) -> Pixel {
    let t = t.clamp(0.0, 1.0);
    if t <= stops[0].0 {
        return stops[0].1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f + 0.5) as u8;
            return Pixel {
                r: lerp(c0.r, c1.r),
                g: lerp(c0.g, c1.g),
                b: lerp(c0.b, c1.b),
                a: lerp(c0.a, c1.a),
            };
        }
    }
    stops[stops.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_circle_covers_center_not_corner() {
        let mut s = Surface::new(20, 20);
        s.fill_circle(Vec2::new(10.0, 10.0), 5.0, Pixel::BLACK, 1.0);
        assert_eq!(s.get_pixel(10, 10), Pixel::BLACK);
        assert_eq!(s.get_pixel(0, 0), Pixel::TRANSPARENT);
    }

    #[test]
    fn zero_radius_is_noop() {
        let mut s = Surface::new(8, 8);
        let before = s.clone();
        s.fill_circle(Vec2::new(4.0, 4.0), 0.0, Pixel::BLACK, 1.0);
        s.stroke_circle(Vec2::new(4.0, 4.0), -1.0, 2.0, Pixel::BLACK, 1.0);
        s.fill_radial_gradient(Vec2::new(4.0, 4.0), 0.0, &[(0.0, Pixel::BLACK)], 1.0);
        assert_eq!(s, before);
    }

    #[test]
    fn empty_surface_is_noop() {
        let mut s = Surface::new(0, 0);
        s.fill_circle(Vec2::new(1.0, 1.0), 5.0, Pixel::BLACK, 1.0);
        s.stroke_segment(Vec2::ZERO, Vec2::new(3.0, 3.0), 2.0, Pixel::BLACK, 1.0);
        assert!(s.is_empty());
    }

    #[test]
    fn stroke_circle_leaves_interior() {
        let mut s = Surface::new(40, 40);
        s.stroke_circle(Vec2::new(20.0, 20.0), 10.0, 2.0, Pixel::BLACK, 1.0);
        assert_eq!(s.get_pixel(20, 20), Pixel::TRANSPARENT);
        // A point on the ring.
        assert_eq!(s.get_pixel(30, 20), Pixel::BLACK);
    }

    #[test]
    fn segment_hits_endpoints_and_midpoint() {
        let mut s = Surface::new(30, 30);
        s.stroke_segment(Vec2::new(5.0, 5.0), Vec2::new(25.0, 5.0), 3.0, Pixel::BLACK, 1.0);
        assert_eq!(s.get_pixel(5, 5), Pixel::BLACK);
        assert_eq!(s.get_pixel(15, 5), Pixel::BLACK);
        assert_eq!(s.get_pixel(25, 5), Pixel::BLACK);
        assert_eq!(s.get_pixel(15, 15), Pixel::TRANSPARENT);
    }

    #[test]
    fn quad_curve_passes_near_endpoints() {
        let mut s = Surface::new(40, 40);
        s.stroke_quad_curve(
            Vec2::new(5.0, 30.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(35.0, 30.0),
            3.0,
            Pixel::BLACK,
            1.0,
        );
        assert_eq!(s.get_pixel(5, 30), Pixel::BLACK);
        assert_eq!(s.get_pixel(35, 30), Pixel::BLACK);
        // The curve sags below the control point, never reaching it.
        assert_eq!(s.get_pixel(20, 0), Pixel::TRANSPARENT);
    }

    #[test]
    fn gradient_fades_outward() {
        let mut s = Surface::new(41, 41);
        let stops = [
            (0.0, Pixel::new(50, 50, 50, 204)),
            (1.0, Pixel::new(0, 0, 0, 0)),
        ];
        s.fill_radial_gradient(Vec2::new(20.0, 20.0), 18.0, &stops, 1.0);
        let center = s.get_pixel(20, 20).a;
        let mid = s.get_pixel(29, 20).a;
        let edge = s.get_pixel(37, 20).a;
        assert!(center > mid, "{center} vs {mid}");
        assert!(mid > edge, "{mid} vs {edge}");
    }
}
