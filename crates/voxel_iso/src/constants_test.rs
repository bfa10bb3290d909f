use super::*;

#[test]
fn test_coord_to_index_roundtrip() {
  let dims = [3, 5, 4];
  for x in 0..dims[0] {
    for y in 0..dims[1] {
      for z in 0..dims[2] {
        let idx = coord_to_index(x, y, z, dims);
        let (rx, ry, rz) = index_to_coord(idx, dims);
        assert_eq!(
          (x, y, z),
          (rx, ry, rz),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_z_is_fastest_axis() {
  let dims = [4, 4, 4];
  assert_eq!(coord_to_index(0, 0, 1, dims), 1);
  assert_eq!(coord_to_index(0, 1, 0, dims), 4);
  assert_eq!(coord_to_index(1, 0, 0, dims), 16);
}

#[test]
fn test_corner_offsets_match_binary_layout() {
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    assert_eq!(offset[0] as usize, corner & 1, "corner {corner} x");
    assert_eq!(offset[1] as usize, (corner >> 1) & 1, "corner {corner} y");
    assert_eq!(offset[2] as usize, (corner >> 2) & 1, "corner {corner} z");
  }
}

#[test]
fn test_polygon_capacity_covers_every_edge() {
  assert_eq!(MAX_POLYGON_VERTICES, EDGE_COUNT + 1);
  assert_eq!(MAX_SEGMENTS, 12);
}
