//! Fixed-range histogram bucketing
//!
//! Pure and total: every `i64` sample maps to a bucket. Out-of-range input
//! is clamped rather than rejected - losing precision on one sample is
//! preferable to failing the logging caller.

use tex_registry::FixedRangeOptions;

/// Compute the bucket index for a sample
///
/// Samples below `min_value` clamp to bucket 0, samples above `max_value`
/// clamp to the last bucket. In-range samples index by floor division on
/// the bucket width; the top edge clamps to absorb the remainder when the
/// range does not divide evenly by the bin count.
#[inline]
pub fn bucket_index(value: i64, options: &FixedRangeOptions) -> usize {
    let last = (options.bin_count() - 1) as usize;
    if value < options.min_value() {
        return 0;
    }
    if value > options.max_value() {
        return last;
    }
    // bin_size >= 1 is guaranteed by FixedRangeOptions validation
    let index = (value - options.min_value()) / options.bin_size();
    (index as usize).min(last)
}
