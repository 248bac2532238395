//! Two wires snake across a grid from a shared origin; find where they cross

use cgmath::{Point2, Vector2};
use itertools::Itertools;
use log::{debug, info};

use crate::{
    utils::{manhattan, Rect},
    Config, Error, Result,
};

/// A straight run of wire, along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point2<i32>,
    pub end: Point2<i32>,
    /// How far along the wire `start` is
    pub steps_before: u64,
}

impl Segment {
    fn bbox(&self) -> Rect<i32> {
        Rect::from_corners(self.start, self.end)
    }

    /// Number of steps along the whole wire needed to reach `p`, which must lie on this segment
    fn steps_to(&self, p: Point2<i32>) -> u64 {
        self.steps_before + manhattan(p - self.start)
    }
}

/// A wire, as the connected sequence of [`Segment`]s it makes from the origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    segments: Vec<Segment>,
}

impl Wire {
    /// Parse moves such as `R75,D30,L4,U12`.  `line` is only used for error messages.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let parse_err = |message: String| Error::Parse { line, message };

        let mut segments = Vec::new();
        let mut pos: Point2<i32> = Point2::new(0, 0);
        let mut steps = 0u64;
        for step in text.trim().split(',') {
            let step = step.trim();
            let mut chars = step.chars();
            let direction = match chars.next() {
                Some('U') => Vector2::new(0, 1),
                Some('D') => Vector2::new(0, -1),
                Some('L') => Vector2::new(-1, 0),
                Some('R') => Vector2::new(1, 0),
                _ => return Err(parse_err(format!("bad direction in {:?}", step))),
            };
            let distance: i32 = chars
                .as_str()
                .parse()
                .map_err(|e| parse_err(format!("bad distance in {:?}: {}", step, e)))?;
            if distance < 0 {
                return Err(parse_err(format!("negative distance in {:?}", step)));
            }

            let offset = direction * distance;
            let end = pos
                .x
                .checked_add(offset.x)
                .zip(pos.y.checked_add(offset.y))
                .map(|(x, y)| Point2::new(x, y))
                .ok_or_else(|| parse_err(format!("{:?} runs off the edge of the grid", step)))?;
            segments.push(Segment {
                start: pos,
                end,
                steps_before: steps,
            });
            pos = end;
            steps = steps
                .checked_add(distance as u64)
                .ok_or_else(|| parse_err("wire is too long".to_owned()))?;
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// A point where two wires cross
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub point: Point2<i32>,
    /// Total steps taken by both wires to reach `point`
    pub steps: u64,
}

impl Crossing {
    /// Manhattan distance from the origin
    pub fn distance(&self) -> u64 {
        manhattan(self.point - Point2::new(0, 0))
    }
}

/// Every point (other than the origin) where a segment of `a` touches a segment of `b`.  If the
/// wires meet at the same point more than once, there will be a [`Crossing`] for each meeting.
pub fn crossings(a: &Wire, b: &Wire) -> Vec<Crossing> {
    let origin = Point2::new(0, 0);
    a.segments()
        .iter()
        .cartesian_product(b.segments())
        .filter_map(|(seg_a, seg_b)| {
            let overlap = seg_a.bbox().intersection(seg_b.bbox())?;
            Some((seg_a, seg_b, overlap))
        })
        .flat_map(|(seg_a, seg_b, overlap)| {
            overlap
                .points()
                .filter(move |&p| p != origin)
                .map(move |point| Crossing {
                    point,
                    steps: seg_a.steps_to(point) + seg_b.steps_to(point),
                })
        })
        .collect_vec()
}

pub fn closest_crossing_distance(crossings: &[Crossing]) -> Result<u64> {
    crossings
        .iter()
        .map(Crossing::distance)
        .min()
        .ok_or_else(no_crossings)
}

pub fn fewest_combined_steps(crossings: &[Crossing]) -> Result<u64> {
    crossings
        .iter()
        .map(|c| c.steps)
        .min()
        .ok_or_else(no_crossings)
}

fn no_crossings() -> Error {
    Error::NoSolution("the wires never cross".to_owned())
}

/// Parse the first two non-blank lines of `text` as [`Wire`]s
pub fn parse_wires(text: &str) -> Result<(Wire, Wire)> {
    let mut wires = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Wire::parse(line, i + 1));
    let missing = |n: usize| Error::Parse {
        line: n,
        message: "expected two wires".to_owned(),
    };
    let a = wires.next().ok_or_else(|| missing(1))??;
    let b = wires.next().ok_or_else(|| missing(2))??;
    Ok((a, b))
}

/// Returns the distance to the closest crossing, and the fewest combined steps to any crossing
pub fn solve(text: &str) -> Result<(u64, u64)> {
    let (a, b) = parse_wires(text)?;
    let crossings = crossings(&a, &b);
    debug!("Wires cross {} times", crossings.len());
    Ok((
        closest_crossing_distance(&crossings)?,
        fewest_combined_steps(&crossings)?,
    ))
}

pub fn run(config: &Config) -> Result<()> {
    let (distance, steps) = solve(&config.read_input()?)?;
    info!("Traced wires from {:?}", config.input);
    println!("CLOSEST DIST  : {}", distance);
    println!("SHORTEST DIST : {}", steps);
    Ok(())
}
