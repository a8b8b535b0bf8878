//! Unit tests for trav-core.

use crate::{
    Direction, EncodedPath, Position, PosId, ROOM_SIZE, RoomName,
    position_at_direction,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn room(x: i16, y: i16) -> RoomName {
    RoomName::new(x, y)
}

fn pos(room_name: RoomName, x: u8, y: u8) -> Position {
    Position::new(room_name, x, y).unwrap()
}

// ── RoomName ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod room_name {
    use super::*;

    #[test]
    fn linear_distance_is_chebyshev() {
        assert_eq!(room(0, 0).linear_distance(room(0, 0)), 0);
        assert_eq!(room(0, 0).linear_distance(room(3, 1)), 3);
        assert_eq!(room(-2, 4).linear_distance(room(1, 4)), 3);
        assert_eq!(room(-5, -5).linear_distance(room(5, 5)), 10);
    }

    #[test]
    fn highway_rooms_sit_on_grid_lines() {
        assert!(room(0, 3).is_highway());
        assert!(room(7, 10).is_highway());
        assert!(room(-10, 3).is_highway());
        assert!(!room(4, 6).is_highway());
        assert!(!room(11, 13).is_highway());
    }

    #[test]
    fn keeper_band_excludes_sector_center() {
        assert!(room(4, 4).is_keeper());
        assert!(room(6, 5).is_keeper());
        assert!(room(5, 6).is_keeper());
        assert!(!room(5, 5).is_keeper()); // sector center
        assert!(!room(3, 5).is_keeper());
        assert!(!room(7, 7).is_keeper());
        // Negative coordinates classify the same way.
        assert!(room(-6, -6).is_keeper());
        assert!(!room(-5, -5).is_keeper());
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod position {
    use super::*;

    #[test]
    fn constructor_rejects_out_of_bounds() {
        assert!(Position::new(room(0, 0), ROOM_SIZE, 0).is_err());
        assert!(Position::new(room(0, 0), 0, ROOM_SIZE).is_err());
        assert!(Position::new(room(0, 0), ROOM_SIZE - 1, ROOM_SIZE - 1).is_ok());
    }

    #[test]
    fn global_round_trip() {
        for &p in &[
            pos(room(0, 0), 0, 0),
            pos(room(3, -2), 49, 17),
            pos(room(-1, -1), 0, 49),
        ] {
            let (gx, gy) = p.global();
            assert_eq!(Position::from_global(gx, gy), p);
        }
    }

    #[test]
    fn range_to_is_same_room_only() {
        let a = pos(room(0, 0), 10, 10);
        assert_eq!(a.range_to(pos(room(0, 0), 13, 11)), Some(3));
        assert_eq!(a.range_to(pos(room(1, 0), 10, 10)), None);
    }

    #[test]
    fn step_stays_in_room() {
        let edge = pos(room(0, 0), 0, 25);
        assert_eq!(edge.step(Direction::Left), None);
        assert_eq!(edge.step(Direction::Right), Some(pos(room(0, 0), 1, 25)));
    }

    #[test]
    fn step_world_crosses_borders_cardinally() {
        let edge = pos(room(0, 0), 0, 25);
        assert_eq!(edge.step_world(Direction::Left), Some(pos(room(-1, 0), 49, 25)));
        // Diagonal corner hop between rooms is not a move.
        let corner = pos(room(0, 0), 0, 0);
        assert_eq!(corner.step_world(Direction::TopLeft), None);
        // Diagonal step along a border that stays on one axis does cross.
        assert_eq!(
            pos(room(0, 0), 0, 25).step_world(Direction::TopLeft),
            Some(pos(room(-1, 0), 49, 24))
        );
    }

    #[test]
    fn opposing_exits_detected() {
        let a = pos(room(0, 0), 49, 20);
        let b = pos(room(1, 0), 0, 20);
        assert!(Position::opposing_exits(a, b));
        assert!(Position::opposing_exits(b, a));
        // Different row: a genuine move.
        assert!(!Position::opposing_exits(a, pos(room(1, 0), 0, 21)));
        // Same room never counts.
        assert!(!Position::opposing_exits(a, pos(room(0, 0), 0, 20)));
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod direction {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_u8(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_u8(0), None);
        assert_eq!(Direction::from_u8(9), None);
        assert_eq!(Direction::from_u8(255), None);
    }

    #[test]
    fn offsets_round_trip() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(Direction::from_offset(dx, dy), Some(dir));
        }
        assert_eq!(Direction::from_offset(0, 0), None);
    }

    #[test]
    fn every_direction_moves_exactly_one_cell() {
        let p = pos(room(0, 0), 25, 25);
        for dir in Direction::ALL {
            let next = position_at_direction(p, dir.code()).unwrap();
            let (dx, dy) = dir.offset();
            assert_eq!(next.x as i16 - p.x as i16, dx as i16);
            assert_eq!(next.y as i16 - p.y as i16, dy as i16);
        }
    }

    #[test]
    fn invalid_codes_decode_to_nothing() {
        let p = pos(room(0, 0), 25, 25);
        assert_eq!(position_at_direction(p, 0), None);
        assert_eq!(position_at_direction(p, 9), None);
    }

    #[test]
    fn opposites_cancel() {
        let p = pos(room(0, 0), 25, 25);
        for dir in Direction::ALL {
            assert_eq!(p.step(dir).unwrap().step(dir.opposite()), Some(p));
        }
    }
}

// ── PosId ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pos_id {
    use super::*;

    #[test]
    fn round_trips_every_cell() {
        let r = room(2, -3);
        for x in 0..ROOM_SIZE {
            for y in 0..ROOM_SIZE {
                let p = pos(r, x, y);
                assert_eq!(PosId::of(p).decode(), Some((x, y)));
            }
        }
    }

    #[test]
    fn band_is_disjoint_from_direction_codes() {
        let min = PosId::of(pos(room(0, 0), 0, 0)).0;
        assert!(min > 8, "smallest PosId {min} collides with direction codes");
    }

    #[test]
    fn out_of_band_values_do_not_decode() {
        assert_eq!(PosId(0).decode(), None);
        assert_eq!(PosId(5).decode(), None);
        assert_eq!(PosId(u16::MAX).decode(), None);
    }
}

// ── EncodedPath ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod encoded_path {
    use super::*;

    #[test]
    fn encode_and_walk() {
        let r = room(0, 0);
        let origin = pos(r, 10, 10);
        let cells = [pos(r, 10, 11), pos(r, 11, 12), pos(r, 11, 13)];
        let mut path = EncodedPath::encode(origin, &cells).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path.cells(), cells.to_vec());
        assert_eq!(path.first(), Some(Direction::Bottom));

        path.advance();
        assert_eq!(path.origin(), pos(r, 10, 11));
        assert_eq!(path.first(), Some(Direction::BottomRight));

        path.advance();
        path.advance();
        assert!(path.is_empty());
        assert_eq!(path.origin(), pos(r, 11, 13));
    }

    #[test]
    fn encode_stops_at_room_boundary() {
        let r = room(0, 0);
        let origin = pos(r, 48, 25);
        let cells = [
            pos(r, 49, 25),
            pos(room(1, 0), 0, 25), // crossing — encoding must stop here
            pos(room(1, 0), 1, 25),
        ];
        let path = EncodedPath::encode(origin, &cells).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.cells(), vec![pos(r, 49, 25)]);
    }

    #[test]
    fn encode_rejects_non_adjacent_cells() {
        let r = room(0, 0);
        let origin = pos(r, 10, 10);
        assert!(EncodedPath::encode(origin, &[pos(r, 13, 10)]).is_err());
        // A repeated cell is not a move either.
        assert!(EncodedPath::encode(origin, &[pos(r, 10, 10)]).is_err());
    }
}
