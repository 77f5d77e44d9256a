use serde::{Deserialize, Serialize};

/// A screen point, used for highlighting and coordinate-fallback replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Parse a uiautomator bounds string `[x1,y1][x2,y2]` into its center point.
///
/// Total: anything not matching the exact four-number bracket-pair pattern
/// (including numbers too large to represent) yields None, never an error.
pub fn bounds_center(bounds: &str) -> Option<Point> {
    let mut scanner = Scanner::new(bounds);

    let (x1, y1) = scanner.bracket_pair()?;
    let (x2, y2) = scanner.bracket_pair()?;
    if !scanner.at_end() {
        return None;
    }

    Some(Point {
        x: midpoint(x1, x2),
        y: midpoint(y1, y2),
    })
}

/// Round-half-up midpoint of two non-negative coordinates.
fn midpoint(a: i64, b: i64) -> i32 {
    ((a + b + 1) / 2) as i32
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { rest: input }
    }

    fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn expect(&mut self, token: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(token)?;
        Some(())
    }

    /// Parse `[n,n]` with non-negative integers.
    fn bracket_pair(&mut self) -> Option<(i64, i64)> {
        self.expect('[')?;
        let a = self.number()?;
        self.expect(',')?;
        let b = self.number()?;
        self.expect(']')?;
        Some((a, b))
    }

    fn number(&mut self) -> Option<i64> {
        let digits: usize = self.rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let (num, rest) = self.rest.split_at(digits);
        self.rest = rest;
        // Coordinates beyond i32 range are not representable screen points.
        num.parse::<i64>().ok().filter(|n| *n <= i32::MAX as i64)
    }
}
