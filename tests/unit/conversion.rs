//! Unit tests for converting raw readings to physical units

use crate::common::mock_interface::{ACCEL_XOUT_H, GYRO_XOUT_H};
use crate::common::{assert_float_eq, create_mock_driver, MockDelay, MockInterface, Operation};
use mpu6050::{AccelRange, GyroRange, Mpu6050, RawAxes, STANDARD_GRAVITY};

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

#[test]
fn test_one_g_at_every_accel_range() {
    for range in [AccelRange::G2, AccelRange::G4, AccelRange::G8, AccelRange::G16] {
        let (mut driver, interface) = create_mock_driver();
        driver.set_accel_range(range).unwrap();

        // Full one-g count for the range on z, half on x
        let one_g = range.scale() as i16;
        interface.set_accel_data(one_g / 2, 0, one_g);

        let accel = driver.read_accel(false).unwrap();
        assert_float_eq(accel.x, STANDARD_GRAVITY / 2.0, 1e-5);
        assert_float_eq(accel.y, 0.0, 1e-6);
        assert_float_eq(accel.z, STANDARD_GRAVITY, 1e-5);
    }
}

#[test]
fn test_accel_formula_for_arbitrary_counts() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_accel_range(AccelRange::G8).unwrap();
    interface.set_accel_data(-32768, 1234, 32767);

    let accel = driver.read_accel(false).unwrap();
    assert_float_eq(accel.x, STANDARD_GRAVITY * -32768.0 / 4096.0, 1e-4);
    assert_float_eq(accel.y, STANDARD_GRAVITY * 1234.0 / 4096.0, 1e-4);
    assert_float_eq(accel.z, STANDARD_GRAVITY * 32767.0 / 4096.0, 1e-4);
}

#[test]
fn test_custom_gravity_constant() {
    let interface = MockInterface::new();
    let mut driver = Mpu6050::with_gravity(interface.clone(), 9.81).unwrap();
    interface.set_accel_data(0, 0, 16384);

    let accel = driver.read_accel(false).unwrap();
    assert_float_eq(accel.z, 9.81, 1e-5);
    assert_float_eq(driver.config().gravity, 9.81, 1e-6);
}

#[test]
fn test_gyro_in_radians_per_second() {
    let cases = [
        (GyroRange::Dps250, 131i16, 1.0f32),
        (GyroRange::Dps500, 655, 10.0),
        (GyroRange::Dps1000, 328, 10.0),
        (GyroRange::Dps2000, 164, 10.0),
    ];

    for (range, raw, dps) in cases {
        let (mut driver, interface) = create_mock_driver();
        driver.set_gyro_range(range).unwrap();
        interface.set_gyro_data(raw, -raw, 0);

        let gyro = driver.read_gyro(false).unwrap();
        assert_float_eq(gyro.x, dps * DEG_TO_RAD, 1e-5);
        assert_float_eq(gyro.y, -dps * DEG_TO_RAD, 1e-5);
        assert_float_eq(gyro.z, 0.0, 1e-6);

        let degrees = gyro.to_degrees_per_sec();
        assert_float_eq(degrees[0], dps, 1e-3);
    }
}

#[test]
fn test_raw_reads_are_big_endian_words() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(ACCEL_XOUT_H, 0x12);
    interface.set_register(ACCEL_XOUT_H + 1, 0x34);
    interface.set_register(ACCEL_XOUT_H + 2, 0xFF);
    interface.set_register(ACCEL_XOUT_H + 3, 0xFE);

    let raw = driver.read_accel_raw().unwrap();
    assert_eq!(raw, RawAxes::new(0x1234, -2, 0));
}

#[test]
fn test_reads_are_idempotent() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(100, -200, 16000);
    interface.set_gyro_data(-5, 17, 300);

    let first = driver.read_all(true).unwrap();
    let second = driver.read_all(true).unwrap();

    assert_eq!(first, second);
    assert_eq!(driver.accel_scale(), 16384.0);
    assert!(driver.calibration().is_zero());
}

#[test]
fn test_read_all_reads_accel_then_gyro() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(16384, 0, 0);
    interface.set_gyro_data(0, 0, 131);

    let data = driver.read_all(false).unwrap();
    assert_float_eq(data.accel.x, STANDARD_GRAVITY, 1e-5);
    assert_float_eq(data.gyro.z, DEG_TO_RAD, 1e-6);

    let reads: Vec<u8> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::ReadRegister { address, .. } => Some(*address),
            Operation::WriteRegister { .. } => None,
        })
        .collect();
    let expected: Vec<u8> = (ACCEL_XOUT_H..ACCEL_XOUT_H + 6)
        .chain(GYRO_XOUT_H..GYRO_XOUT_H + 6)
        .collect();
    assert_eq!(reads, expected);
}

#[test]
fn test_bias_applied_only_on_request() {
    let (mut driver, interface) = create_mock_driver();
    // Level device with a small offset on every axis
    interface.set_accel_data(820, -410, 16384);
    interface.set_gyro_data(131, 0, -262);
    driver.calibrate(4, &mut MockDelay::new()).unwrap();

    // One extra g on x, one extra °/s on y
    interface.set_accel_data(820 + 16384, -410, 16384);
    interface.set_gyro_data(131, 131, -262);

    let raw = driver.read_all(false).unwrap();
    let corrected = driver.read_all(true).unwrap();

    assert_float_eq(raw.accel.z, STANDARD_GRAVITY, 1e-5);
    assert_float_eq(raw.accel.y, -STANDARD_GRAVITY * 410.0 / 16384.0, 1e-6);
    assert_float_eq(raw.gyro.x, DEG_TO_RAD, 1e-6);
    assert_float_eq(corrected.accel.x, STANDARD_GRAVITY, 1e-5);
    assert_float_eq(corrected.accel.y, 0.0, 1e-6);
    assert_float_eq(corrected.accel.z, 0.0, 1e-6);
    assert_float_eq(corrected.gyro.x, 0.0, 1e-6);
    assert_float_eq(corrected.gyro.y, DEG_TO_RAD, 1e-6);
    assert_float_eq(corrected.gyro.z, 0.0, 1e-6);
}

#[test]
fn test_temperature_reading() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(0);
    assert_float_eq(driver.read_temperature_celsius().unwrap(), 36.53, 1e-4);

    // -11.53 °C below the offset: 25 °C
    interface.set_temperature_data(-3920);
    assert_float_eq(driver.read_temperature_celsius().unwrap(), 25.0, 1e-2);
}

#[test]
fn test_magnitude_at_rest() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(0, 0, 16384);

    let accel = driver.read_accel(false).unwrap();
    assert_float_eq(accel.magnitude(), STANDARD_GRAVITY, 1e-5);
}
