//! Counting the passwords in a range which satisfy rules about their digits

use std::ops::Range;

use itertools::Itertools;
use log::{debug, info};

use crate::{Config, Error, Result};

/// Parse a range written as `min-max` on the first line.  `max` itself is not included.
pub fn parse_range(text: &str) -> Result<Range<u32>> {
    let line = text.lines().next().unwrap_or("").trim();
    let parse_err = |message: String| Error::Parse { line: 1, message };

    let (min, max) = line
        .split_once('-')
        .ok_or_else(|| parse_err(format!("expected `min-max`, found {:?}", line)))?;
    let parse_bound = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| parse_err(format!("bad bound {:?}: {}", s, e)))
    };
    Ok(parse_bound(min)?..parse_bound(max)?)
}

fn digits(n: u32) -> Vec<u8> {
    n.to_string().into_bytes()
}

/// `true` if no digit is smaller than the digit before it
pub fn is_non_decreasing(n: u32) -> bool {
    digits(n).into_iter().tuple_windows().all(|(a, b)| a <= b)
}

/// `true` if at least two adjacent digits are the same
pub fn has_adjacent_pair(n: u32) -> bool {
    digits(n).into_iter().tuple_windows().any(|(a, b)| a == b)
}

/// `true` if some run of equal adjacent digits is exactly two long (so `111122` qualifies
/// because of the `22`, but `123444` doesn't)
pub fn has_exact_pair(n: u32) -> bool {
    let runs = digits(n).into_iter().group_by(|&d| d);
    // Bound to a local so the iterator borrowing `runs` is dropped before `runs` is
    let has_pair = (&runs).into_iter().any(|(_, run)| run.count() == 2);
    has_pair
}

pub fn count_matching(range: Range<u32>, rule: impl Fn(u32) -> bool) -> usize {
    range.filter(|&n| is_non_decreasing(n) && rule(n)).count()
}

/// Returns the number of passwords in the range which satisfy the first and second set of rules
pub fn solve(text: &str) -> Result<(usize, usize)> {
    let range = parse_range(text)?;
    debug!("Checking passwords in {:?}", range);
    Ok((
        count_matching(range.clone(), has_adjacent_pair),
        count_matching(range, has_exact_pair),
    ))
}

pub fn run(config: &Config) -> Result<()> {
    let (part1, part2) = solve(&config.read_input()?)?;
    info!("Checked password range from {:?}", config.input);
    println!("TOTAL PASSWORDS (PART 1) : {}", part1);
    println!("TOTAL PASSWORDS (PART 2) : {}", part2);
    Ok(())
}
