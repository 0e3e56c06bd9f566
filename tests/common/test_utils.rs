//! Test utilities and helper functions

#[cfg(not(feature = "async"))]
use crate::common::mock_interface::MockInterface;
#[cfg(not(feature = "async"))]
use mpu6050::Mpu6050;

/// Delay implementation for testing that records requested waits instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    /// Every `delay_ms` call, in order
    pub delays_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Create a mock driver for testing
///
/// The construction traffic (waking the device) is cleared from the log.
/// Returns (driver, interface) where interface is a clone that shares state with the driver
#[cfg(not(feature = "async"))]
pub fn create_mock_driver() -> (Mpu6050<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Mpu6050::new(interface).expect("Failed to create mock driver");
    interface_clone.clear_operations();
    (driver, interface_clone)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
