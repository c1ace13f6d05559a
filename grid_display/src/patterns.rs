// patterns.rs - Named seed patterns, as lists of live (row, col) cells

use conway::Pattern;

pub struct NamedPattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl NamedPattern {
    /// The pattern's bounding box as a seed block.
    pub fn build(&self) -> conway::Result<Pattern> {
        Pattern::from_live_cells(self.cells)
    }
}

pub const PATTERNS: &[NamedPattern] = &[
    NamedPattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    NamedPattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    NamedPattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    NamedPattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    NamedPattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    NamedPattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    NamedPattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_builds() {
        for pattern in PATTERNS {
            let block = pattern.build().unwrap();
            assert_eq!(block.live_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn pattern_sizes() {
        let size = |name: &str| {
            PATTERNS
                .iter()
                .find(|pattern| pattern.name == name)
                .map(|pattern| pattern.build().unwrap().dimensions())
        };
        assert_eq!(size("Glider"), Some((3, 3)));
        assert_eq!(size("Pulsar"), Some((13, 13)));
        assert_eq!(size("Gosper Glider Gun"), Some((36, 9)));
    }
}
