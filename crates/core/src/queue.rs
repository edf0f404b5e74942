//! Next queue - the five upcoming pieces
//!
//! The queue is refilled with uniform random draws over the seven kinds;
//! repeats are allowed and there is no bag. The generator is a seeded
//! `StdRng`, so the same seed always deals the same game.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, NEXT_QUEUE_LEN};

/// FIFO of upcoming piece kinds
#[derive(Debug, Clone)]
pub struct NextQueue {
    pieces: ArrayVec<PieceKind, NEXT_QUEUE_LEN>,
    rng: StdRng,
}

impl NextQueue {
    /// Create a full queue dealt from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            pieces: ArrayVec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        queue.refill();
        queue
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Append random kinds until the queue holds five.
    pub fn refill(&mut self) {
        while !self.pieces.is_full() {
            let kind = self.draw();
            self.pieces.push(kind);
        }
    }

    /// Drop everything and deal five fresh kinds.
    ///
    /// The random stream continues; it is not reseeded.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.refill();
    }

    /// Take the head of the queue.
    ///
    /// An empty queue is refilled first, so this always yields a kind.
    pub fn pop(&mut self) -> PieceKind {
        if self.pieces.is_empty() {
            self.refill();
        }
        self.pieces.remove(0)
    }

    pub fn peek(&self) -> Option<PieceKind> {
        self.pieces.first().copied()
    }

    /// Upcoming kinds, head first.
    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_is_full() {
        let queue = NextQueue::new(1);
        assert_eq!(queue.len(), NEXT_QUEUE_LEN);
    }

    #[test]
    fn pop_then_refill_keeps_five() {
        let mut queue = NextQueue::new(7);
        let head = queue.peek();
        assert_eq!(Some(queue.pop()), head);
        assert_eq!(queue.len(), 4);
        queue.refill();
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn pop_shifts_the_queue_forward() {
        let mut queue = NextQueue::new(99);
        let before: Vec<_> = queue.iter().collect();
        queue.pop();
        let after: Vec<_> = queue.iter().collect();
        assert_eq!(&before[1..], &after[..]);
    }

    #[test]
    fn reset_on_empty_queue_backfills() {
        let mut queue = NextQueue::new(3);
        queue.clear();
        assert!(queue.is_empty());
        queue.reset();
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn pop_on_empty_queue_refills_first() {
        let mut queue = NextQueue::new(3);
        queue.clear();
        queue.pop();
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NextQueue::new(12345);
        let mut b = NextQueue::new(12345);
        for _ in 0..50 {
            assert_eq!(a.pop(), b.pop());
            a.refill();
            b.refill();
        }
    }

    #[test]
    fn every_kind_eventually_appears() {
        let mut queue = NextQueue::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = queue.pop();
            seen[PieceKind::ALL.iter().position(|&k| k == kind).unwrap()] = true;
            queue.refill();
        }
        assert!(seen.iter().all(|&s| s));
    }
}
