//! Case tables for marching squares.
//!
//! # Square Topology
//!
//! ```text
//!   2 ───── 3        Corners (binary YX):
//!   │   3   │          0=(0,0)  1=(1,0)  2=(0,1)  3=(1,1)
//!   1       2
//!   │   0   │        Edges (see SQUARE_EDGES):
//!   0 ───── 1          0=[0,1] bottom  1=[0,2] left
//!                      2=[1,3] right   3=[2,3] top
//! ```
//!
//! # Case Index
//!
//! Bit `c` of the case index is set when corner `c` is solid.
//!
//! ```text
//! Case 0b0001 (only corner 0 solid)
//!
//!   2 ───── 3
//!   │       │
//!   ●╲      │       one segment: left edge → bottom edge
//!   │ ╲     │       (solid corner on its right)
//!   0 ─●─── 1
//! ```

use crate::constants::SQUARE_EDGES;

/// Segments per case as `(from_edge, to_edge)` pairs.
///
/// Walking from `from_edge` to `to_edge` keeps the solid corners on the
/// right. Saddles (6 and 9) cut off each solid corner separately.
pub const SEGMENT_TABLE: [&[[u8; 2]]; 16] = [
  &[],               // 0b0000
  &[[1, 0]],         // 0b0001
  &[[0, 2]],         // 0b0010
  &[[1, 2]],         // 0b0011
  &[[3, 1]],         // 0b0100
  &[[3, 0]],         // 0b0101
  &[[0, 2], [3, 1]], // 0b0110 saddle
  &[[3, 2]],         // 0b0111
  &[[2, 3]],         // 0b1000
  &[[1, 0], [2, 3]], // 0b1001 saddle
  &[[0, 3]],         // 0b1010
  &[[1, 3]],         // 0b1011
  &[[2, 1]],         // 0b1100
  &[[2, 0]],         // 0b1101
  &[[0, 1]],         // 0b1110
  &[],               // 0b1111
];

/// Crossing table.
/// Index: 4-bit corner mask (which corners are solid)
/// Value: 4-bit edge mask (which edges have crossings)
pub const CROSSING_TABLE: [u8; 16] = generate_crossing_table();

/// Generate the crossing table at compile time.
const fn generate_crossing_table() -> [u8; 16] {
  let mut table = [0u8; 16];
  let mut case = 0usize;

  while case < 16 {
    let mut edge_mask = 0u8;
    let mut edge = 0;

    while edge < 4 {
      let solid0 = (case >> SQUARE_EDGES[edge][0]) & 1;
      let solid1 = (case >> SQUARE_EDGES[edge][1]) & 1;

      if solid0 != solid1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[case] = edge_mask;
    case += 1;
  }

  table
}

#[cfg(test)]
#[path = "case_table_test.rs"]
mod case_table_test;
