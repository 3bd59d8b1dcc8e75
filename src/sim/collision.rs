//! Collision and scoring predicates
//!
//! Pure geometry over the bird and pipe primitives; the tick sequences
//! and applies the outcomes. All comparisons are strict, so exact
//! edge-touching never registers as contact.

use super::state::{Bird, Pipe};

/// True when the bird's horizontal span overlaps the pipe's.
pub fn spans_overlap(bird: &Bird, pipe: &Pipe) -> bool {
    bird.right() > pipe.x && bird.left() < pipe.right()
}

/// True when the bird's vertical span breaches either gap boundary.
pub fn breaches_gap(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.y - bird.radius < pipe.top || bird.pos.y + bird.radius > pipe.bottom
}

/// True once the pipe's right edge is fully left of the bird's left edge.
/// The scoring condition.
pub fn cleared_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    pipe.right() < bird.left()
}

/// True when the bird's top edge pokes above the ceiling.
pub fn hits_ceiling(bird: &Bird) -> bool {
    bird.pos.y - bird.radius < 0.0
}

/// True when the bird's bottom edge reaches the ground line.
pub fn hits_ground(bird: &Bird, ground_y: f32) -> bool {
    bird.pos.y + bird.radius > ground_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
            radius: 14.0,
        }
    }

    #[test]
    fn test_spans_overlap_strict_edges() {
        let pipe = Pipe::new(114.0, 100.0, 150.0, 64.0);

        // Bird's right edge exactly on the pipe's left edge: no contact.
        assert!(!spans_overlap(&bird_at(100.0, 175.0), &pipe));
        // A hair further right: contact.
        assert!(spans_overlap(&bird_at(100.1, 175.0), &pipe));

        // Bird's left edge exactly on the pipe's right edge: no contact.
        let pipe = Pipe::new(50.0, 100.0, 150.0, 64.0);
        assert!(!spans_overlap(&bird_at(128.0, 175.0), &pipe));
        assert!(spans_overlap(&bird_at(127.9, 175.0), &pipe));
    }

    #[test]
    fn test_breaches_gap_strict_edges() {
        let pipe = Pipe::new(100.0, 100.0, 150.0, 64.0);

        // Fully inside the gap.
        assert!(!breaches_gap(&bird_at(134.0, 175.0), &pipe));
        // Touching the top boundary exactly is still safe.
        assert!(!breaches_gap(&bird_at(134.0, 114.0), &pipe));
        assert!(breaches_gap(&bird_at(134.0, 113.9), &pipe));
        // Touching the bottom boundary exactly is still safe.
        assert!(!breaches_gap(&bird_at(134.0, 236.0), &pipe));
        assert!(breaches_gap(&bird_at(134.0, 236.1), &pipe));
    }

    #[test]
    fn test_cleared_pipe_strict() {
        let bird = bird_at(100.0, 175.0);

        // Right edge exactly at the bird's left edge: not cleared yet.
        assert!(!cleared_pipe(&bird, &Pipe::new(22.0, 100.0, 150.0, 64.0)));
        assert!(cleared_pipe(&bird, &Pipe::new(21.9, 100.0, 150.0, 64.0)));
    }

    #[test]
    fn test_boundary_predicates() {
        assert!(hits_ceiling(&bird_at(134.0, 13.9)));
        assert!(!hits_ceiling(&bird_at(134.0, 14.0)));

        let ground_y = 560.0;
        assert!(!hits_ground(&bird_at(134.0, 546.0), ground_y));
        assert!(hits_ground(&bird_at(134.0, 546.1), ground_y));
    }
}
