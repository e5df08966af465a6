//! In-place range rewriting.
//!
//! Two flavours share one relocation routine and differ only in where the
//! bytes above the removed range end up:
//!
//! - [`Arena::splice`] moves them to absolute offset `data.len()`. This is
//!   the layout existing callers depend on. It is a true "replace
//!   `bottom..top`" only when `bottom == 0` or the size is unchanged.
//! - [`Arena::replace_range`] moves them to `bottom + data.len()`, the
//!   general sub-range replacement.
//!
//! Both validate everything up front and leave the arena untouched on
//! error.

use crate::arena::Arena;
use crate::error::ArenaError;

impl Arena {
    /// Replace `bottom..top` with `data`, keeping the legacy tail layout.
    ///
    /// Steps:
    /// 1. `tail_len = len - top`.
    /// 2. If the replacement changes the range size, move the tail
    ///    `top..top + tail_len` to offset `data.len()` (overlap-safe).
    /// 3. Copy `data` to `bottom..bottom + data.len()`.
    /// 4. `len = bottom + data.len() + tail_len`.
    ///
    /// With `bottom > 0` and a size change, step 2 places the tail at
    /// `data.len()` rather than right after the new data. Use
    /// [`replace_range`](Arena::replace_range) for that.
    ///
    /// Fails with [`ArenaError::InvalidRange`] unless
    /// `bottom < top <= len`, and with [`ArenaError::CapacityExceeded`] if
    /// the resulting length would not fit.
    pub fn splice(&mut self, bottom: usize, top: usize, data: &[u8]) -> Result<(), ArenaError> {
        self.rewrite(bottom, top, data, data.len())
    }

    /// Replace `bottom..top` with `data`, shifting the tail to follow it.
    ///
    /// Same preconditions and failure behaviour as [`splice`](Arena::splice);
    /// identical to it whenever `bottom == 0`.
    pub fn replace_range(
        &mut self,
        bottom: usize,
        top: usize,
        data: &[u8],
    ) -> Result<(), ArenaError> {
        self.rewrite(bottom, top, data, bottom + data.len())
    }

    fn rewrite(
        &mut self,
        bottom: usize,
        top: usize,
        data: &[u8],
        tail_dest: usize,
    ) -> Result<(), ArenaError> {
        let len = self.len();
        if bottom >= top || top > len {
            return Err(ArenaError::InvalidRange {
                bottom,
                top,
                length: len,
            });
        }

        let tail_len = len - top;
        // Both the moved tail (ends at tail_dest + tail_len) and the copied
        // data (ends at bottom + data.len()) lie within 0..new_len.
        let new_len = bottom + data.len() + tail_len;
        if new_len > self.capacity() {
            return Err(ArenaError::CapacityExceeded {
                requested: new_len - len,
                available: self.free_space(),
            });
        }

        let buffer = self.buffer_mut();
        if top - bottom != data.len() {
            buffer.copy_within(top..len, tail_dest);
        }
        buffer[bottom..bottom + data.len()].copy_from_slice(data);
        self.set_len(new_len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, ArenaError};

    fn arena_with(content: &[u8], capacity: usize) -> Arena {
        let mut arena = Arena::new(capacity).unwrap();
        arena.append_bytes(content).unwrap();
        arena
    }

    #[test]
    fn prefix_shrink() {
        let mut arena = arena_with(b"XXXXYYYY", 16);
        arena.splice(0, 4, b"Z").unwrap();
        assert_eq!(arena.view(), b"ZYYYY");
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn prefix_growth_with_overlapping_tail() {
        let mut arena = arena_with(b"AXYZ", 16);
        arena.splice(0, 1, b"12345").unwrap();
        assert_eq!(arena.view(), b"12345XYZ");
        assert_eq!(arena.len(), 8);
    }

    #[test]
    fn prefix_growth_tail_longer_than_shift() {
        // Tail (8 bytes) is longer than the 3-byte shift, so source and
        // destination overlap heavily.
        let mut arena = arena_with(b"ab01234567", 32);
        arena.splice(0, 2, b"WXYZA").unwrap();
        assert_eq!(arena.view(), b"WXYZA01234567");
    }

    #[test]
    fn same_size_replacement_in_the_middle() {
        let mut arena = arena_with(b"hello world", 16);
        arena.splice(6, 11, b"there").unwrap();
        assert_eq!(arena.view(), b"hello there");
    }

    #[test]
    fn replace_whole_content() {
        let mut arena = arena_with(b"rtp,", 64);
        arena.splice(0, 4, b"git clone ").unwrap();
        assert_eq!(arena.view(), b"git clone ");
    }

    #[test]
    fn empty_replacement_deletes_prefix() {
        let mut arena = arena_with(b"dropkeep", 16);
        arena.splice(0, 4, b"").unwrap();
        assert_eq!(arena.view(), b"keep");
    }

    #[test]
    fn nonzero_bottom_places_tail_at_data_len() {
        // tail "EFGH" goes to offset 3 (data.len()), not 2 + 3.
        //   after move:  A B C E F G H H \0
        //   after copy:  A B x y z G H H \0
        let mut arena = arena_with(b"ABCDEFGH", 16);
        arena.splice(2, 4, b"xyz").unwrap();
        assert_eq!(arena.view(), b"ABxyzGHH\0");
        assert_eq!(arena.len(), 9);
    }

    #[test]
    fn nonzero_bottom_shrinking_overwrites_prefix() {
        // tail "GH" moves to offset 1 (data.len()), then "z" lands at 4.
        //   after move:  A G H D E F G H
        //   after copy:  A G H D z F G H  (len 4 + 1 + 2 = 7)
        let mut arena = arena_with(b"ABCDEFGH", 16);
        arena.splice(4, 6, b"z").unwrap();
        assert_eq!(arena.view(), b"AGHDzFG");
        assert_eq!(arena.len(), 7);
    }

    #[test]
    fn nonzero_bottom_same_size_does_not_move_tail() {
        let mut arena = arena_with(b"ABCDEFGH", 16);
        arena.splice(4, 5, b"z").unwrap();
        assert_eq!(arena.view(), b"ABCDzFGH");
    }

    #[test]
    fn replace_range_shifts_tail_after_new_data() {
        let mut arena = arena_with(b"ABCDEFGH", 16);
        arena.replace_range(2, 4, b"xyz").unwrap();
        assert_eq!(arena.view(), b"ABxyzEFGH");

        arena.replace_range(1, 7, b"-").unwrap();
        assert_eq!(arena.view(), b"A-GH");
    }

    #[test]
    fn replace_range_matches_splice_at_prefix() {
        let mut a = arena_with(b"prefix/tail", 32);
        let mut b = arena_with(b"prefix/tail", 32);
        a.splice(0, 6, b"p").unwrap();
        b.replace_range(0, 6, b"p").unwrap();
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn invalid_ranges_are_rejected_without_mutation() {
        let mut arena = arena_with(b"abcd", 8);
        for (bottom, top) in [(2, 2), (3, 1), (0, 5), (4, 9)] {
            let err = arena.splice(bottom, top, b"zz").unwrap_err();
            assert_eq!(
                err,
                ArenaError::InvalidRange {
                    bottom,
                    top,
                    length: 4
                }
            );
            assert!(arena.replace_range(bottom, top, b"zz").is_err());
        }
        assert_eq!(arena.view(), b"abcd");
    }

    #[test]
    fn growth_past_capacity_is_rejected() {
        let mut arena = arena_with(b"abcdef", 8);
        let err = arena.splice(0, 1, b"1234").unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(arena.view(), b"abcdef");

        // Exactly filling the arena is fine.
        arena.splice(0, 1, b"123").unwrap();
        assert_eq!(arena.view(), b"123bcdef");
    }

    #[test]
    fn splice_on_destroyed_arena_fails() {
        let mut arena = arena_with(b"abc", 4);
        arena.destroy();
        assert!(matches!(
            arena.splice(0, 1, b"x"),
            Err(ArenaError::InvalidRange { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn model_replace(content: &[u8], bottom: usize, top: usize, data: &[u8]) -> Vec<u8> {
            let mut out = content[..bottom].to_vec();
            out.extend_from_slice(data);
            out.extend_from_slice(&content[top..]);
            out
        }

        proptest! {
            #[test]
            fn prefix_splice_matches_vec_model(
                content in proptest::collection::vec(any::<u8>(), 1..64),
                data in proptest::collection::vec(any::<u8>(), 0..64),
                top_seed in any::<usize>(),
            ) {
                let top = 1 + top_seed % content.len();
                let mut arena = arena_with(&content, 256);
                arena.splice(0, top, &data).unwrap();
                let expected = model_replace(&content, 0, top, &data);
                prop_assert_eq!(arena.view(), &expected[..]);
            }

            #[test]
            fn replace_range_matches_vec_model(
                content in proptest::collection::vec(any::<u8>(), 1..64),
                data in proptest::collection::vec(any::<u8>(), 0..64),
                a in any::<usize>(),
                b in any::<usize>(),
            ) {
                let bottom = a % content.len();
                let top = bottom + 1 + b % (content.len() - bottom);
                let mut arena = arena_with(&content, 256);
                arena.replace_range(bottom, top, &data).unwrap();
                let expected = model_replace(&content, bottom, top, &data);
                prop_assert_eq!(arena.view(), &expected[..]);
            }

            #[test]
            fn failed_rewrites_leave_arena_untouched(
                content in proptest::collection::vec(any::<u8>(), 0..16),
                data in proptest::collection::vec(any::<u8>(), 0..32),
                bottom in 0usize..24,
                top in 0usize..24,
            ) {
                let mut arena = arena_with(&content, 24);
                let before = arena.view().to_vec();
                if arena.splice(bottom, top, &data).is_err() {
                    prop_assert_eq!(arena.view(), &before[..]);
                }
                prop_assert!(arena.len() <= arena.capacity());
            }
        }
    }
}
