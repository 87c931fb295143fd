//! [`TerrainBoard`]: a ready-made [`HexBoard`] driven by per-cell terrain.
//!
//! Stepping into a cell costs that cell's terrain, so costs are directed:
//! climbing onto a hill is dear, walking off it is cheap. Individual
//! hexsides can additionally be blocked, one way or both.

use hexroute_core::{HexCoords, Hexside, HexsideSet, MapSize};

use crate::config::LandmarkConfig;
use crate::error::{Error, Result};
use crate::landmarks::LandmarkSet;
use crate::traits::{HexBoard, StepCost};

/// A board of terrain costs and blocked hexsides.
#[derive(Clone, Debug)]
pub struct TerrainBoard {
    size: MapSize,
    terrain: Vec<Option<StepCost>>,
    blocked: Vec<HexsideSet>,
    min_step: StepCost,
    max_step: StepCost,
    landmarks: Option<LandmarkSet>,
}

impl TerrainBoard {
    /// A board where entering any cell costs `cost`.
    pub fn uniform(width: i32, height: i32, cost: StepCost) -> Self {
        let size = MapSize::new(width, height);
        Self {
            size,
            terrain: vec![Some(cost); size.len()],
            blocked: vec![HexsideSet::EMPTY; size.len()],
            min_step: cost,
            max_step: cost,
            landmarks: None,
        }
    }

    /// Parse a board from rows of text.
    ///
    /// `.` costs 1, the digits `1`–`9` cost their value and `#` is
    /// impassable. Rows are separated by newlines and must all have the same
    /// width; surrounding blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.trim_matches('\n').lines().collect();
        let Some(first) = rows.first() else {
            return Err(Error::EmptyMap);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(Error::EmptyMap);
        }

        let mut terrain = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Some(StepCost::ONE),
                    '#' => None,
                    '1'..='9' => StepCost::new(ch as u16 - '0' as u16),
                    _ => return Err(Error::InvalidTerrain { ch, row, column }),
                };
                terrain.push(cell);
            }
        }

        let size = MapSize::new(width as i32, rows.len() as i32);
        let mut board = Self {
            size,
            blocked: vec![HexsideSet::EMPTY; size.len()],
            terrain,
            min_step: StepCost::ONE,
            max_step: StepCost::ONE,
            landmarks: None,
        };
        board.update_step_range();
        Ok(board)
    }

    /// Terrain cost of entering `coords`; `None` if impassable or off the
    /// board.
    pub fn terrain(&self, coords: HexCoords) -> Option<StepCost> {
        self.size.index(coords).and_then(|i| self.terrain[i])
    }

    /// Change the cost of entering `coords` (`None` makes it impassable).
    ///
    /// Landmarks computed for the old costs are discarded.
    pub fn set_terrain(&mut self, coords: HexCoords, cost: Option<StepCost>) {
        if let Some(i) = self.size.index(coords) {
            self.terrain[i] = cost;
            self.update_step_range();
            self.invalidate_landmarks();
        }
    }

    /// Make `coords` impassable from every side.
    pub fn set_impassable(&mut self, coords: HexCoords) {
        self.set_terrain(coords, None);
    }

    /// Block the edge between `coords` and its neighbor across `hexside`,
    /// in both directions.
    pub fn block_hexside(&mut self, coords: HexCoords, hexside: Hexside) {
        self.block_exit(coords, hexside);
        self.block_exit(coords.neighbor(hexside), hexside.reverse());
    }

    /// Forbid leaving `coords` across `hexside`; the opposite step is
    /// unaffected.
    pub fn block_exit(&mut self, coords: HexCoords, hexside: Hexside) {
        if let Some(i) = self.size.index(coords) {
            self.blocked[i].insert(hexside);
            self.invalidate_landmarks();
        }
    }

    /// Whether leaving `coords` across `hexside` is forbidden.
    pub fn is_blocked(&self, coords: HexCoords, hexside: Hexside) -> bool {
        self.size
            .index(coords)
            .is_some_and(|i| self.blocked[i].contains(hexside))
    }

    /// Attach a landmark set computed for this board.
    pub fn set_landmarks(&mut self, landmarks: LandmarkSet) {
        self.landmarks = Some(landmarks);
    }

    /// Compute and attach landmarks at the default seeds.
    pub fn build_landmarks(&mut self, config: &LandmarkConfig) {
        self.landmarks = None;
        let set = LandmarkSet::build_default(&*self, config);
        self.landmarks = Some(set);
    }

    /// Detach the landmark set, if any.
    pub fn take_landmarks(&mut self) -> Option<LandmarkSet> {
        self.landmarks.take()
    }

    fn invalidate_landmarks(&mut self) {
        if self.landmarks.take().is_some() {
            log::debug!("board edited, discarding landmarks");
        }
    }

    fn update_step_range(&mut self) {
        let mut costs = self.terrain.iter().flatten().copied();
        let Some(first) = costs.next() else {
            self.min_step = StepCost::ONE;
            self.max_step = StepCost::ONE;
            return;
        };
        let (min, max) = costs.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));
        self.min_step = min;
        self.max_step = max;
    }
}

impl HexBoard for TerrainBoard {
    fn map_size(&self) -> MapSize {
        self.size
    }

    fn try_exit_cost(&self, coords: HexCoords, hexside: Hexside) -> Option<StepCost> {
        let i = self.size.index(coords)?;
        if self.blocked[i].contains(hexside) {
            return None;
        }
        self.terrain(coords.neighbor(hexside))
    }

    fn min_step_cost(&self) -> StepCost {
        self.min_step
    }

    fn max_step_cost(&self) -> StepCost {
        self.max_step
    }

    fn landmarks(&self) -> Option<&LandmarkSet> {
        self.landmarks.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> HexCoords {
        HexCoords::from_user(x, y)
    }

    #[test]
    fn parse_and_size() {
        let b = TerrainBoard::parse("..#\n.3.\n").unwrap();
        assert_eq!(b.map_size(), MapSize::new(3, 2));
        assert_eq!(b.terrain(c(0, 0)), Some(StepCost::ONE));
        assert_eq!(b.terrain(c(2, 0)), None);
        assert_eq!(b.terrain(c(1, 1)), StepCost::new(3));
        assert_eq!(b.terrain(c(3, 0)), None);
        assert_eq!(b.min_step_cost(), StepCost::ONE);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TerrainBoard::parse("").unwrap_err(), Error::EmptyMap);
        assert_eq!(
            TerrainBoard::parse("...\n..").unwrap_err(),
            Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            TerrainBoard::parse("..\n.x").unwrap_err(),
            Error::InvalidTerrain {
                ch: 'x',
                row: 1,
                column: 1
            }
        );
        assert_eq!(
            TerrainBoard::parse("..\n.x").unwrap_err().to_string(),
            "invalid terrain 'x' at column 1, row 1"
        );
    }

    #[test]
    fn step_range_tracks_terrain() {
        let mut b = TerrainBoard::parse("23\n45").unwrap();
        assert_eq!(b.min_step_cost(), StepCost::new(2).unwrap());
        assert_eq!(b.max_step_cost(), StepCost::new(5).unwrap());
        b.set_terrain(c(0, 0), None);
        assert_eq!(b.min_step_cost(), StepCost::new(3).unwrap());
        b.set_terrain(c(1, 1), StepCost::new(4000));
        assert_eq!(b.max_step_cost(), StepCost::new(4000).unwrap());
    }

    #[test]
    fn costs_are_directed() {
        let mut b = TerrainBoard::uniform(2, 1, StepCost::ONE);
        b.set_terrain(c(1, 0), StepCost::new(4));
        assert_eq!(b.try_exit_cost(c(0, 0), Hexside::NorthEast), StepCost::new(4));
        assert_eq!(b.try_exit_cost(c(1, 0), Hexside::SouthWest), Some(StepCost::ONE));
        assert_eq!(b.try_entry_cost(c(1, 0), Hexside::SouthWest), StepCost::new(4));
        assert_eq!(b.try_entry_cost(c(0, 0), Hexside::NorthEast), Some(StepCost::ONE));
    }

    #[test]
    fn blocked_hexsides() {
        let mut b = TerrainBoard::uniform(3, 3, StepCost::ONE);
        b.block_hexside(c(1, 1), Hexside::South);
        assert_eq!(b.try_exit_cost(c(1, 1), Hexside::South), None);
        assert_eq!(b.try_exit_cost(c(1, 2), Hexside::North), None);
        assert!(b.try_exit_cost(c(1, 1), Hexside::North).is_some());

        b.block_exit(c(0, 0), Hexside::South);
        assert!(b.is_blocked(c(0, 0), Hexside::South));
        assert_eq!(b.try_exit_cost(c(0, 0), Hexside::South), None);
        assert!(b.try_exit_cost(c(0, 1), Hexside::North).is_some());
    }

    #[test]
    fn impassable_cell_cannot_be_entered() {
        let mut b = TerrainBoard::uniform(3, 3, StepCost::ONE);
        b.set_impassable(c(1, 1));
        for (h, n) in c(1, 1).neighbors() {
            assert_eq!(b.try_entry_cost(c(1, 1), h), None);
            assert_eq!(b.try_exit_cost(n, h.reverse()), None);
        }
    }

    #[test]
    fn edits_discard_landmarks() {
        let mut b = TerrainBoard::uniform(4, 4, StepCost::ONE);
        b.build_landmarks(&LandmarkConfig::default());
        assert!(b.landmarks().is_some());
        b.set_terrain(c(2, 2), StepCost::new(3));
        assert!(b.landmarks().is_none());
    }

    #[test]
    fn landmarks_can_be_detached() {
        let mut b = TerrainBoard::uniform(4, 4, StepCost::ONE);
        assert!(b.take_landmarks().is_none());
        b.build_landmarks(&LandmarkConfig::default());
        let set = b.take_landmarks().unwrap();
        assert!(b.landmarks().is_none());
        assert_eq!(set.len(), 8);
        b.set_landmarks(set);
        assert!(b.landmarks().is_some());
    }
}
