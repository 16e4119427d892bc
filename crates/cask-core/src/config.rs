//! Pool configuration parameters.

/// Configuration for a block pool.
///
/// The block size is the policy a pool carries across `derive_for`
/// re-parameterization: pools derived for a different element type
/// keep the same block size while acquiring their own reserve.
/// Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of element slots per block.
    ///
    /// Default: 10. Must be at least 1; validated by pool construction.
    pub block_size: u32,
}

impl PoolConfig {
    /// Default number of slots per block.
    pub const DEFAULT_BLOCK_SIZE: u32 = 10;

    /// Create a config with the given block size.
    pub fn new(block_size: u32) -> Self {
        Self { block_size }
    }

    /// Size in bytes of one block of `T` slots under this config.
    pub fn block_bytes<T>(&self) -> usize {
        self.block_size as usize * std::mem::size_of::<T>()
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block_size_is_ten() {
        let config = PoolConfig::default();
        assert_eq!(config.block_size, 10);
    }

    #[test]
    fn block_bytes_scales_with_element_size() {
        let config = PoolConfig::new(16);
        assert_eq!(config.block_bytes::<u8>(), 16);
        assert_eq!(config.block_bytes::<u64>(), 128);
    }

    #[test]
    fn block_bytes_is_zero_for_zero_sized_elements() {
        let config = PoolConfig::new(16);
        assert_eq!(config.block_bytes::<()>(), 0);
    }
}
