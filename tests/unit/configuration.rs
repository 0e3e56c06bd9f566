//! Unit tests for range, filter and sample rate configuration

use crate::common::mock_interface::{ACCEL_CONFIG, CONFIG, GYRO_CONFIG, SMPLRT_DIV};
use crate::common::{assert_float_eq, create_mock_driver};
use mpu6050::{AccelRange, Error, GyroRange, LowpassFilter, PowerState};

const ACCEL_RANGES: [(AccelRange, f32); 4] = [
    (AccelRange::G2, 16384.0),
    (AccelRange::G4, 8192.0),
    (AccelRange::G8, 4096.0),
    (AccelRange::G16, 2048.0),
];

const GYRO_RANGES: [(GyroRange, f32); 4] = [
    (GyroRange::Dps250, 131.0),
    (GyroRange::Dps500, 65.5),
    (GyroRange::Dps1000, 32.8),
    (GyroRange::Dps2000, 16.4),
];

#[test]
fn test_defaults_after_construction() {
    let (driver, _interface) = create_mock_driver();
    let config = driver.config();

    assert_eq!(config.accel_range, AccelRange::G2);
    assert_eq!(config.gyro_range, GyroRange::Dps250);
    assert_eq!(config.sample_rate_divider, 0);
    assert_eq!(config.lowpass, LowpassFilter::Hz256);
    assert_eq!(driver.power_state(), PowerState::Awake);
    assert_float_eq(driver.accel_scale(), 16384.0, 1e-6);
    assert_float_eq(driver.gyro_scale(), GyroRange::Dps250.scale(), 1e-6);
    assert!(driver.calibration().is_zero());
}

#[test]
fn test_accel_range_writes_field_and_scale() {
    for (range, scale) in ACCEL_RANGES {
        let (mut driver, interface) = create_mock_driver();
        // Self-test bits and the reserved low bits must survive
        interface.set_register(ACCEL_CONFIG, 0b1110_0111);

        driver.set_accel_range(range).unwrap();

        let expected = 0b1110_0111 | (range.code() << 3);
        assert_eq!(interface.writes_to(ACCEL_CONFIG), vec![expected]);
        assert_eq!(interface.write_count(), 1);
        assert_eq!(driver.config().accel_range, range);
        assert_float_eq(driver.accel_scale(), scale, 1e-6);
    }
}

#[test]
fn test_gyro_range_writes_field_and_scale() {
    for (range, sensitivity) in GYRO_RANGES {
        let (mut driver, interface) = create_mock_driver();
        interface.set_register(GYRO_CONFIG, 0b1110_0000);

        driver.set_gyro_range(range).unwrap();

        let expected = 0b1110_0000 | (range.code() << 3);
        assert_eq!(interface.writes_to(GYRO_CONFIG), vec![expected]);
        assert_eq!(interface.write_count(), 1);
        assert_eq!(driver.config().gyro_range, range);
        assert_float_eq(
            driver.gyro_scale(),
            sensitivity * 180.0 / core::f32::consts::PI,
            1e-2,
        );
    }
}

#[test]
fn test_range_change_clears_previous_field() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_accel_range(AccelRange::G16).unwrap();
    driver.set_accel_range(AccelRange::G4).unwrap();

    assert_eq!(interface.get_register(ACCEL_CONFIG), 0b0000_1000);
    assert_float_eq(driver.accel_scale(), 8192.0, 1e-6);
}

#[test]
fn test_accel_range_does_not_touch_gyro_scale() {
    let (mut driver, _interface) = create_mock_driver();
    driver.set_gyro_range(GyroRange::Dps1000).unwrap();
    let gyro_scale = driver.gyro_scale();

    for (range, _) in ACCEL_RANGES {
        driver.set_accel_range(range).unwrap();
        assert_eq!(driver.gyro_scale(), gyro_scale);
        assert_eq!(driver.config().gyro_range, GyroRange::Dps1000);
    }
}

#[test]
fn test_gyro_range_does_not_touch_accel_scale() {
    let (mut driver, _interface) = create_mock_driver();
    driver.set_accel_range(AccelRange::G8).unwrap();

    for (range, _) in GYRO_RANGES {
        driver.set_gyro_range(range).unwrap();
        assert_eq!(driver.accel_scale(), 4096.0);
        assert_eq!(driver.config().accel_range, AccelRange::G8);
    }
}

#[test]
fn test_sample_rate_divider_written_verbatim() {
    let (mut driver, interface) = create_mock_driver();

    for divider in [0u8, 7, 99, 255] {
        driver.set_sample_rate_divider(divider).unwrap();
        assert_eq!(interface.get_register(SMPLRT_DIV), divider);
        assert_eq!(driver.config().sample_rate_divider, divider);
    }
    assert_eq!(interface.writes_to(SMPLRT_DIV), vec![0, 7, 99, 255]);
}

#[test]
fn test_sample_rate_follows_filter() {
    let (mut driver, _interface) = create_mock_driver();
    driver.set_sample_rate_divider(7).unwrap();

    // Filter at its widest setting: gyro runs at 8 kHz
    assert_float_eq(driver.config().sample_rate_hz(), 1000.0, 1e-3);

    driver.set_lowpass_filter(LowpassFilter::Hz42).unwrap();
    assert_float_eq(driver.config().sample_rate_hz(), 125.0, 1e-3);
}

#[test]
fn test_lowpass_filter_preserves_ext_sync() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CONFIG, 0b0010_1000);

    driver.set_lowpass_filter(LowpassFilter::Hz5).unwrap();
    assert_eq!(interface.get_register(CONFIG), 0b0010_1110);

    driver.set_lowpass_filter(LowpassFilter::Hz188).unwrap();
    assert_eq!(interface.get_register(CONFIG), 0b0010_1001);
    assert_eq!(driver.config().lowpass, LowpassFilter::Hz188);
}

#[test]
fn test_raw_codes_accepted() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_accel_range_code(3).unwrap();
    driver.set_gyro_range_code(1).unwrap();
    driver.set_lowpass_filter_code(6).unwrap();

    assert_eq!(driver.config().accel_range, AccelRange::G16);
    assert_eq!(driver.config().gyro_range, GyroRange::Dps500);
    assert_eq!(driver.config().lowpass, LowpassFilter::Hz5);
    assert_eq!(interface.get_register(ACCEL_CONFIG), 0b0001_1000);
}

#[test]
fn test_unknown_codes_rejected_without_bus_traffic() {
    let (mut driver, interface) = create_mock_driver();
    let before = *driver.config();

    assert_eq!(driver.set_accel_range_code(4), Err(Error::InvalidArgument));
    assert_eq!(driver.set_gyro_range_code(0x18), Err(Error::InvalidArgument));
    assert_eq!(driver.set_lowpass_filter_code(7), Err(Error::InvalidArgument));

    assert!(interface.operations().is_empty());
    assert_eq!(*driver.config(), before);
}
