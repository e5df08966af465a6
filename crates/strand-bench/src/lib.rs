//! Benchmark inputs for the Strand arena and bootstrap sequence.
//!
//! Generators are seeded so every run stages the same bytes:
//!
//! - [`path_fragments`]: slash-separated path pieces of bounded length
//! - [`splice_ops`]: in-range `(bottom, top)` pairs for a given length
//! - [`plugin_specs`]: plugin declarations with a mix of checkouts and deps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strand_core::PluginSpec;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-_.";

fn word(rng: &mut ChaCha8Rng, max_len: usize) -> String {
    let len = 1 + rng.next_u32() as usize % max_len.max(1);
    (0..len)
        .map(|_| ALPHABET[rng.next_u32() as usize % ALPHABET.len()] as char)
        .collect()
}

/// Generate `count` path fragments, each `/`-prefixed and at most
/// `max_len + 1` bytes long.
pub fn path_fragments(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| format!("/{}", word(&mut rng, max_len)))
        .collect()
}

/// Generate `count` ranges with `bottom < top <= len`.
///
/// Returns an empty vector when `len` is zero.
pub fn splice_ops(seed: u64, count: usize, len: usize) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let bottom = rng.next_u32() as usize % len;
            let top = bottom + 1 + rng.next_u32() as usize % (len - bottom);
            (bottom, top)
        })
        .collect()
}

/// Generate `count` plugin declarations.
///
/// Roughly one in four pins a checkout; dependency counts cycle
/// between zero and two.
pub fn plugin_specs(seed: u64, count: usize) -> Vec<PluginSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut spec = PluginSpec::new(format!(
                "{}/{}.nvim",
                word(&mut rng, 12),
                word(&mut rng, 16)
            ));
            if rng.next_u32() % 4 == 0 {
                spec = spec.checkout(word(&mut rng, 8));
            }
            for _ in 0..i % 3 {
                spec = spec.depends_on(format!("{}/{}", word(&mut rng, 8), word(&mut rng, 12)));
            }
            spec
        })
        .collect()
}
