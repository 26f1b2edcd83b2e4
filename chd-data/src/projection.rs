//! Albers USA map projection.
//!
//! A composite of three conic equal-area projections: the lower 48 states,
//! plus Alaska and Hawaii moved into insets below the southwest corner.
//! Each point is tried against the lower-48, Alaska and Hawaii projections
//! in turn and accepted by the first whose clip extent contains it.

use std::f64::consts::PI;

const EPSILON: f64 = 1e-6;

/// Projected screen coordinates.
pub type Point = (f64, f64);

/// Conic equal-area (Albers) projection with d3's rotate/center/scale/translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    /// Longitude rotation in radians.
    rotate: f64,
    scale: f64,
    /// Screen offset, with the projected center folded in.
    dx: f64,
    dy: f64,
}

impl ConicEqualArea {
    /// `parallels`, `rotate` and `center` are in degrees.
    pub fn new(parallels: (f64, f64), rotate: f64, center: (f64, f64), scale: f64, translate: Point) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = (sy0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;
        let mut projection = Self {
            n,
            c,
            r0,
            rotate: rotate.to_radians(),
            scale,
            dx: 0.0,
            dy: 0.0,
        };
        let (cx, cy) = projection.raw(center.0.to_radians(), center.1.to_radians());
        projection.dx = translate.0 - scale * cx;
        projection.dy = translate.1 + scale * cy;
        projection
    }

    fn raw(&self, lambda: f64, phi: f64) -> Point {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let x = lambda * self.n;
        (r * x.sin(), self.r0 - r * x.cos())
    }

    /// Project a (longitude, latitude) pair in degrees.
    pub fn project(&self, lon: f64, lat: f64) -> Point {
        let mut lambda = lon.to_radians() + self.rotate;
        if lambda > PI {
            lambda -= 2.0 * PI;
        } else if lambda < -PI {
            lambda += 2.0 * PI;
        }
        let (x, y) = self.raw(lambda, lat.to_radians());
        (self.dx + self.scale * x, self.dy - self.scale * y)
    }
}

/// Axis-aligned clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min: Point,
    max: Point,
}

impl Extent {
    fn contains(&self, p: Point) -> bool {
        p.0 >= self.min.0 && p.0 <= self.max.0 && p.1 >= self.min.1 && p.1 <= self.max.1
    }
}

/// The sub-projection a point or ring was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Lower48,
    Alaska,
    Hawaii,
}

/// The composite Albers USA projection.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbersUsa {
    parts: [(Region, ConicEqualArea, Extent); 3],
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: Point) -> Self {
        let (x, y) = translate;
        let k = scale;
        let lower48 = ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7), k, translate);
        let alaska = ConicEqualArea::new(
            (55.0, 65.0),
            154.0,
            (-2.0, 58.5),
            k * 0.35,
            (x - 0.307 * k, y + 0.201 * k),
        );
        let hawaii = ConicEqualArea::new(
            (8.0, 18.0),
            157.0,
            (-3.0, 19.9),
            k,
            (x - 0.205 * k, y + 0.212 * k),
        );
        Self {
            parts: [
                (
                    Region::Lower48,
                    lower48,
                    Extent {
                        min: (x - 0.455 * k, y - 0.238 * k),
                        max: (x + 0.455 * k, y + 0.238 * k),
                    },
                ),
                (
                    Region::Alaska,
                    alaska,
                    Extent {
                        min: (x - 0.425 * k + EPSILON, y + 0.120 * k + EPSILON),
                        max: (x - 0.214 * k - EPSILON, y + 0.234 * k - EPSILON),
                    },
                ),
                (
                    Region::Hawaii,
                    hawaii,
                    Extent {
                        min: (x - 0.214 * k + EPSILON, y + 0.166 * k + EPSILON),
                        max: (x - 0.115 * k - EPSILON, y + 0.234 * k - EPSILON),
                    },
                ),
            ],
        }
    }

    /// The region whose clip extent contains the projected point.
    pub fn region(&self, lon: f64, lat: f64) -> Option<Region> {
        self.parts
            .iter()
            .find(|(_, projection, extent)| extent.contains(projection.project(lon, lat)))
            .map(|(region, _, _)| *region)
    }

    /// Project a point, or `None` if it falls outside all three regions.
    pub fn project(&self, lon: f64, lat: f64) -> Option<Point> {
        self.parts.iter().find_map(|(_, projection, extent)| {
            let p = projection.project(lon, lat);
            extent.contains(p).then_some(p)
        })
    }

    /// Project with a specific region, without clipping. Used to keep every
    /// vertex of a ring in the same inset.
    pub fn project_in(&self, region: Region, lon: f64, lat: f64) -> Point {
        let (_, projection, _) = self
            .parts
            .iter()
            .find(|(r, _, _)| *r == region)
            .unwrap_or(&self.parts[0]);
        projection.project(lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point, tol: f64) -> bool {
        (a.0 - b.0).abs() < tol && (a.1 - b.1).abs() < tol
    }

    #[test]
    fn center_maps_to_translate() {
        let p = ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7), 900.0, (400.0, 250.0));
        assert!(close(p.project(-96.6, 38.7), (400.0, 250.0), 1e-6));
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        let kansas = usa.project(-98.0, 38.5).unwrap();
        let minnesota = usa.project(-94.0, 46.0).unwrap();
        let georgia = usa.project(-83.5, 32.5).unwrap();
        assert!(minnesota.1 < kansas.1);
        assert!(georgia.0 > kansas.0);
    }

    #[test]
    fn lower48_points_stay_in_lower48() {
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        assert_eq!(usa.region(-122.4, 37.8), Some(Region::Lower48)); // San Francisco
        assert_eq!(usa.region(-70.2, 43.7), Some(Region::Lower48)); // Portland, ME
        assert_eq!(usa.region(-80.2, 25.8), Some(Region::Lower48)); // Miami
    }

    #[test]
    fn alaska_and_hawaii_use_insets() {
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        assert_eq!(usa.region(-149.9, 61.2), Some(Region::Alaska)); // Anchorage
        assert_eq!(usa.region(-157.8, 21.3), Some(Region::Hawaii)); // Honolulu

        let honolulu = usa.project(-157.8, 21.3).unwrap();
        assert!(honolulu.0 < 400.0 && honolulu.1 > 250.0, "inset sits bottom-left");
    }

    #[test]
    fn points_outside_the_us_are_rejected() {
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        assert_eq!(usa.project(2.35, 48.85), None); // Paris
        assert_eq!(usa.project(151.2, -33.9), None); // Sydney
    }
}
