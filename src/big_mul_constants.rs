/// Largest value served from the shared small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// Starting point for capacity doubling in `BigUint::reserve`.
pub const MIN_CAPACITY: usize = 4;

/// Upper bound on the limb count of a single magnitude. An allocation is
/// capped at `isize::MAX` bytes, so with 4-byte limbs no buffer can ever
/// grow past this many limbs.
pub const MAX_LIMBS: usize = isize::MAX as usize / 4;
